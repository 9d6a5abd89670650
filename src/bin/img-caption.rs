//! Run an img-caption job file.
//!
//! Usage:
//!   img-caption [OPTIONS] JOB.json
//!
//! Set `RUST_LOG=img_caption=debug` to see layout decisions.

use std::path::PathBuf;

use img_caption::OverlayJob;

fn usage() {
    eprintln!("Usage: img-caption [OPTIONS] JOB.json");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --out PATH        Write the result here instead of the job's output");
    eprintln!("  --format FORMAT   png or jpeg (default: from job or output extension)");
    eprintln!("  --help, -h        Show this help");
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut job_path: Option<PathBuf> = None;
    let mut out_override: Option<PathBuf> = None;
    let mut format_override: Option<String> = None;
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--out" | "--format" if i + 1 >= args.len() => {
                eprintln!("{} expects a value", args[i]);
                usage();
                std::process::exit(1);
            }
            "--out" => {
                i += 1;
                out_override = Some(PathBuf::from(&args[i]));
            }
            "--format" => {
                i += 1;
                format_override = Some(args[i].clone());
            }
            "--help" | "-h" => {
                usage();
                std::process::exit(0);
            }
            other if job_path.is_none() => {
                job_path = Some(PathBuf::from(other));
            }
            other => {
                eprintln!("Unexpected argument: {}", other);
                usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let Some(job_path) = job_path else {
        usage();
        std::process::exit(1);
    };

    let mut job = OverlayJob::load(&job_path).unwrap_or_else(|e| {
        eprintln!("Failed to load {}: {}", job_path.display(), e);
        std::process::exit(1);
    });
    if let Some(out) = out_override {
        job.output = out;
    }
    if format_override.is_some() {
        job.format = format_override;
    }

    let report = job.run().unwrap_or_else(|e| {
        eprintln!("img-caption: {}", e);
        std::process::exit(1);
    });

    std::fs::write(&job.output, &report.encoded).unwrap_or_else(|e| {
        eprintln!("Failed to write {}: {}", job.output.display(), e);
        std::process::exit(1);
    });

    for (idx, cursor) in report.cursors.iter().enumerate() {
        eprintln!("  caption {}: cursor ({}, {})", idx, cursor.x, cursor.y);
    }
    eprintln!(
        "Wrote {} ({}, {} bytes)",
        job.output.display(),
        report.format,
        report.encoded.len()
    );
}
