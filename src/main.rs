use anyhow::{bail, ensure, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::{env, fs, path::PathBuf};

use mednet_json::year_page::{parse_year_page, CalendarFeast};

struct Args {
    calendar_path: String,
    output_path: Option<String>,
}

fn get_args() -> Result<Args> {
    let args: Vec<String> = env::args().skip(1).collect();

    let opts = getopts::Options::new();

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    let calendar_path = matches
        .free
        .first()
        .context("path to the calendar year pages is required")?
        .clone();
    let output_path = matches.free.get(1).map(|s| s.clone());

    Ok(Args {
        calendar_path,
        output_path,
    })
}

enum BuildOut {
    Null,
    File { root: PathBuf },
}

impl BuildOut {
    fn init_file(root: &str) -> Result<Self> {
        let root = PathBuf::from(&root);
        fs::create_dir(&root).context("Failed to create output directory")?;

        Ok(Self::File { root })
    }

    fn save_feasts(&self, feasts: &[CalendarFeast]) -> Result<()> {
        if let BuildOut::File { root } = &self {
            fs::write(root.join("feasts.json"), serde_json::to_string(&feasts)?)?;

            let mut writer = csv::Writer::from_path(root.join("feasts.csv"))?;
            writer.write_record(["month", "day", "title", "attributes", "modifiers", "sources"])?;
            for feast in feasts {
                writer.write_record([
                    feast.month.clone(),
                    feast.day.to_string(),
                    feast.record.title.clone(),
                    feast.record.attributes.join("; "),
                    feast.record.modifiers.join("; "),
                    feast.record.sources.join("; "),
                ])?;
            }
            writer.flush()?;
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    let args = get_args()?;

    let calendar_path = PathBuf::from(&args.calendar_path);
    ensure!(
        calendar_path.exists(),
        "File not found: {}",
        calendar_path.display()
    );

    let out = if let Some(output_path) = &args.output_path {
        BuildOut::init_file(output_path)
            .with_context(|| format!("Failed to output directory: {}", &output_path))?
    } else {
        BuildOut::Null
    };

    println!("Processing year pages...");

    let page_paths = {
        let mut page_paths = Vec::new();

        if calendar_path.is_dir() {
            for entry in fs::read_dir(&calendar_path)? {
                let path = entry?.path();
                match path.extension().and_then(|e| e.to_str()) {
                    Some("htm") | Some("html") => page_paths.push(path),
                    _ => {}
                }
            }
            page_paths.sort();
        } else {
            page_paths.push(calendar_path.clone());
        }

        page_paths
    };
    ensure!(
        !page_paths.is_empty(),
        "No year pages found in {}",
        calendar_path.display()
    );

    let mut feasts = Vec::new();

    let pb = create_progress_bar(page_paths.len() as u64);
    for path in page_paths.iter().progress_with(pb) {
        let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

        // The pages predate UTF-8.
        let txt = encoding_rs::WINDOWS_1252.decode(&bytes).0.into_owned();

        let page_feasts = parse_year_page(&txt)
            .with_context(|| format!("Failed to process year page: {}", path.display()))?;
        feasts.extend(page_feasts);
    }

    out.save_feasts(&feasts)?;

    println!("Finished. {} feast entries.", feasts.len());

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
