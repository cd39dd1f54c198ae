use serde::Serialize;

// ---------------------------------------------------------------------------
// Deterministic sample launch data for trying out the dashboard
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SampleRow {
    #[serde(rename = "Flight Number")]
    flight_number: usize,
    #[serde(rename = "Launch Site")]
    launch_site: &'static str,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    booster_category: &'static str,
    #[serde(rename = "class")]
    class: u8,
}

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
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const SITES: [&str; 4] = [
    "CCAFS LC-40",
    "CCAFS SLC-40",
    "KSC LC-39A",
    "VAFB SLC-4E",
];

// (category, typical payload kg, success probability)
const BOOSTERS: [(&str, f64, f64); 5] = [
    ("v1.0", 500.0, 0.40),
    ("v1.1", 2500.0, 0.55),
    ("FT", 4500.0, 0.80),
    ("B4", 5500.0, 0.85),
    ("B5", 6500.0, 0.95),
];

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "launches.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    let n_rows = 120;
    for flight_number in 1..=n_rows {
        // Later flights skew toward newer boosters.
        let progress = flight_number as f64 / n_rows as f64;
        let booster_idx = ((progress * BOOSTERS.len() as f64)
            + rng.gauss(0.0, 0.8))
        .clamp(0.0, BOOSTERS.len() as f64 - 1.0) as usize;
        let (category, typical_payload, success_prob) = BOOSTERS[booster_idx];

        let site = SITES[(rng.next_u64() % SITES.len() as u64) as usize];
        let payload_mass_kg =
            (rng.gauss(typical_payload, 1500.0).clamp(0.0, 9600.0) * 10.0).round() / 10.0;
        let class = u8::from(rng.next_f64() < success_prob);

        writer
            .serialize(SampleRow {
                flight_number,
                launch_site: site,
                payload_mass_kg,
                booster_category: category,
                class,
            })
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {n_rows} launch records to {output_path}");
}
