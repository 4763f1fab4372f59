use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{Map, Value, json};

/// Write a deterministic synthetic alumni dataset for trying out the viewer.
#[derive(Parser, Debug)]
struct Args {
    /// Number of alumni to generate
    #[arg(default_value_t = 120)]
    count: usize,

    /// Output JSON file
    #[arg(default_value = "sample_alumni.json")]
    output: PathBuf,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Ananya", "Rohan", "Priya", "Vikram", "Sneha", "Karan", "Meera", "Arjun", "Divya",
    "Nikhil", "Pooja", "Rahul", "Kavya", "Ishita", "Aditya", "Neha", "Shreya", "Varun", "Kabir",
];
const LAST_NAMES: &[&str] = &[
    "Sharma", "Verma", "Iyer", "Nair", "Gupta", "Reddy", "Patel", "Singh", "Menon", "Das",
];
const COURSES: &[&str] = &["MCA", "PhD", "B.Tech", "M.Tech"];
const OCCUPATIONS: &[&str] = &[
    "Software Engineer",
    "Data Scientist",
    "Assistant Professor",
    "Product Manager",
    "Research Scientist",
    "Founder",
];
const SKILLS: &[&str] = &[
    "Rust, Distributed Systems",
    "Python, Machine Learning",
    "Embedded C",
    "Cloud, Kubernetes",
    "Compilers",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }

    fn chance(&mut self, percent: usize) -> bool {
        self.below(100) < percent
    }
}

/// Batch text in the shapes seen in real exports, including a few without
/// any year at all.
fn batch_text(rng: &mut SimpleRng) -> Value {
    let year = 2005 + rng.below(20) as u32;
    match rng.below(6) {
        0 => json!(year),
        1 => json!(format!("{}-{}", year - 4, year)),
        2 => json!(format!("{} - {}", year - 2, year)),
        3 => json!(format!("Graduated {year}")),
        4 => json!(""),
        _ => json!(year.to_string()),
    }
}

fn alumnus(rng: &mut SimpleRng, id: usize) -> Value {
    let name = format!("{} {}", rng.pick(FIRST_NAMES), rng.pick(LAST_NAMES));
    let slug = name.to_lowercase().replace(' ', "-");

    let mut obj = Map::new();
    obj.insert("Name".into(), json!(name));
    obj.insert("Course".into(), json!(rng.pick(COURSES)));
    obj.insert("Batch".into(), batch_text(rng));
    if rng.chance(80) {
        obj.insert("Occupation".into(), json!(rng.pick(OCCUPATIONS)));
    }
    if rng.chance(70) {
        obj.insert("Skill".into(), json!(rng.pick(SKILLS)));
    }
    if rng.chance(40) {
        obj.insert("Image".into(), json!(format!("images/alumni/{slug}.jpg")));
    }
    if rng.chance(60) {
        obj.insert(
            "LinkedIn".into(),
            json!(format!("https://www.linkedin.com/in/{slug}-{id}")),
        );
    }
    Value::Object(obj)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    let records: Vec<Value> = (0..args.count).map(|i| alumnus(&mut rng, i)).collect();

    let text = serde_json::to_string_pretty(&records).context("serialising alumni")?;
    std::fs::write(&args.output, text)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!("Wrote {} alumni to {}", records.len(), args.output.display());
    Ok(())
}
