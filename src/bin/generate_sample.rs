use std::sync::Arc;

use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

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

const OXIDES: [&str; 6] = ["SiO2", "TiO2", "Al2O3", "MgO", "CaO", "K2O"];

/// Mean oxide wt.% per rock type (rough igneous-suite values) and the
/// relative scatter applied to each.
const ROCK_TYPES: [(&str, [f64; 6]); 4] = [
    ("basalt", [49.5, 1.8, 14.5, 7.5, 10.5, 0.6]),
    ("andesite", [58.0, 0.9, 17.0, 3.5, 7.0, 1.6]),
    ("dacite", [65.0, 0.6, 16.0, 1.8, 4.5, 2.5]),
    ("rhyolite", [73.5, 0.3, 13.5, 0.4, 1.4, 4.2]),
];

const SAMPLES_PER_TYPE: usize = 25;

fn main() {
    let mut rng = SimpleRng::new(42);

    let mut rock_type: Vec<String> = Vec::new();
    let mut sample_ids: Vec<String> = Vec::new();
    let mut oxide_values: Vec<Vec<f64>> = vec![Vec::new(); OXIDES.len()];

    for (name, means) in &ROCK_TYPES {
        for i in 0..SAMPLES_PER_TYPE {
            rock_type.push((*name).to_string());
            sample_ids.push(format!("{}-{:03}", &name[..2].to_uppercase(), i + 1));
            for (ox_idx, &mean) in means.iter().enumerate() {
                let sigma = (mean * 0.06).max(0.05);
                let value = rng.gauss(mean, sigma).max(0.0);
                oxide_values[ox_idx].push((value * 100.0).round() / 100.0);
            }
        }
    }

    let n_rows = rock_type.len();
    write_csv(&sample_ids, &rock_type, &oxide_values).expect("Failed to write CSV");
    write_parquet(&sample_ids, &rock_type, &oxide_values).expect("Failed to write Parquet");

    println!(
        "Wrote {n_rows} analyses ({} oxides each) to sample_data.csv and sample_data.parquet",
        OXIDES.len()
    );
}

fn write_csv(
    sample_ids: &[String],
    rock_type: &[String],
    oxide_values: &[Vec<f64>],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_path("sample_data.csv")?;

    let mut header = vec!["SampleID".to_string()];
    header.extend(OXIDES.iter().map(|s| s.to_string()));
    header.push("RockType".to_string());
    writer.write_record(&header)?;

    for row in 0..sample_ids.len() {
        let mut record = vec![sample_ids[row].clone()];
        for col in oxide_values {
            record.push(col[row].to_string());
        }
        record.push(rock_type[row].clone());
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_parquet(
    sample_ids: &[String],
    rock_type: &[String],
    oxide_values: &[Vec<f64>],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut fields = vec![Field::new("SampleID", DataType::Utf8, false)];
    for oxide in OXIDES {
        fields.push(Field::new(oxide, DataType::Float64, false));
    }
    fields.push(Field::new("RockType", DataType::Utf8, false));
    let schema = Arc::new(Schema::new(fields));

    let mut arrays: Vec<Arc<dyn arrow::array::Array>> = vec![Arc::new(StringArray::from(
        sample_ids.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
    ))];
    for col in oxide_values {
        arrays.push(Arc::new(Float64Array::from(col.clone())));
    }
    arrays.push(Arc::new(StringArray::from(
        rock_type.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
    )));

    let batch = RecordBatch::try_new(schema.clone(), arrays)?;

    let file = std::fs::File::create("sample_data.parquet")?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}
