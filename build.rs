use std::io::{Result, Write};

// Phred+33, '!' through 'J'
const MAX_QUAL_INDEX: i32 = (b'J' - b'!') as i32;

const LOG_CORRECT_FLOOR: f64 = -100000.0;

fn log_correct(index: i32) -> f64 {
    if index == 0 {
        LOG_CORRECT_FLOOR
    } else {
        (1.0 - 10f64.powf(index as f64 / -10.0)).ln()
    }
}

fn log_error(index: i32) -> f64 {
    if index == 0 {
        -(3f64.ln())
    } else {
        (10f64.powf(index as f64 / -10.0) / 3.0).ln()
    }
}

fn main() -> Result<()> {
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let dest_path = std::path::Path::new(&out_dir).join("quality_table.rs");
    let mut f = std::fs::File::create(&dest_path).unwrap();

    let len = MAX_QUAL_INDEX + 1;

    writeln!(f, "const LOG_CORRECT_TABLE: [f64; {}] = [", len)?;
    for i in 0..len {
        writeln!(f, "  {:?},", log_correct(i))?;
    }
    writeln!(f, "];")?;

    writeln!(f, "const LOG_ERROR_TABLE: [f64; {}] = [", len)?;
    for i in 0..len {
        writeln!(f, "  {:?},", log_error(i))?;
    }
    writeln!(f, "];")?;

    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
