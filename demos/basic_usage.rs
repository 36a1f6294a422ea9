use std::collections::HashMap;
use std::path::Path;

use vgm_trace::*;

fn main() {
    let input_file = "contact.vgm";
    let vgm_path = format!("./vgm_files/{}", input_file);

    if !Path::new(&vgm_path).exists() {
        println!(
            "VGM file '{}' not found. Please ensure it exists in ./vgm_files/",
            input_file
        );
        return;
    }

    println!("Tracing VGM file: {}", input_file);

    let trace = match trace_path(Path::new(&vgm_path), DecoderConfig::verbose()) {
        Ok(trace) => trace,
        Err(e) => {
            eprintln!("Could not open {}: {} ({})", vgm_path, e, e.suggested_action());
            return;
        },
    };

    // Count register writes per YM2151 register and the total reported wait
    let mut register_tracker: HashMap<u8, u32> = HashMap::new();
    let mut reported_wait: u64 = 0;
    let mut pcm_writes = 0;

    for unit in trace {
        match unit {
            Ok(TraceUnit::Ym2151Write { register, .. }) => {
                *register_tracker.entry(register).or_insert(0) += 1;
            },
            Ok(TraceUnit::Wait { cycles }) => reported_wait += cycles as u64,
            Ok(TraceUnit::PcmWrite { .. }) => pcm_writes += 1,
            Ok(_) => (),
            Err(e) => {
                println!("Trace stopped: {} [{} error {}]", e, e.category(), e.code());
                break;
            },
        }
    }

    println!("YM2151 writes: {}", register_tracker.values().sum::<u32>());
    println!("Unique registers used: {}", register_tracker.len());
    println!("Reported wait: {} cycles", reported_wait);
    println!("PCM writes: {}", pcm_writes);

    if let Ok(register_json) = serde_json::to_string_pretty(&register_tracker) {
        println!("\nRegister usage:\n{}", register_json);
    }
}
