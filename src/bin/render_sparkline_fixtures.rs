#[cfg(feature = "cairo-backend")]
use serde::Deserialize;
#[cfg(feature = "cairo-backend")]
use sparkline_rs::StyleConfig;
#[cfg(feature = "cairo-backend")]
use std::fs;
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_MANIFEST_PATH: &str = "tests/fixtures/sparkline_gallery.json";
#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_ROOT: &str = "target/sparkline_fixtures";

#[cfg(feature = "cairo-backend")]
#[derive(Debug, Deserialize)]
struct FixtureGallery {
    schema_version: u32,
    fixtures: Vec<SparklineFixture>,
}

#[cfg(feature = "cairo-backend")]
#[derive(Debug, Deserialize)]
struct SparklineFixture {
    id: String,
    #[serde(default)]
    description: String,
    data: Vec<f64>,
    #[serde(default)]
    options: StyleConfig,
}

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    manifest_path: PathBuf,
    output_root: PathBuf,
    only_fixture_id: Option<String>,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    let _ = sparkline_rs::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    let args = parse_args(std::env::args().skip(1))?;
    let raw = fs::read_to_string(&args.manifest_path).map_err(|err| {
        format!(
            "failed to read manifest `{}`: {err}",
            args.manifest_path.display()
        )
    })?;
    let gallery: FixtureGallery = serde_json::from_str(&raw)
        .map_err(|err| format!("failed to parse manifest json: {err}"))?;
    if gallery.schema_version != 1 {
        return Err(format!(
            "unsupported fixture schema version: {}",
            gallery.schema_version
        ));
    }
    let selected = select_fixtures(&gallery, args.only_fixture_id.as_deref())?;

    fs::create_dir_all(&args.output_root).map_err(|err| {
        format!(
            "failed to create output dir `{}`: {err}",
            args.output_root.display()
        )
    })?;

    for fixture in &selected {
        let output_path = args.output_root.join(format!("{}.png", fixture.id));
        sparkline_rs::plot_to_file(&output_path, &fixture.data, &fixture.options)
            .map_err(|err| format!("fixture `{}` render failed: {err}", fixture.id))?;
        println!(
            "{:<24} {:>3} samples  {}",
            fixture.id,
            fixture.data.len(),
            fixture.description
        );
    }

    println!(
        "rendered {} sparkline(s) into {}",
        selected.len(),
        args.output_root.display()
    );
    Ok(())
}

/// Fixtures to render: all of them, or the one named by `--only`.
///
/// Ids name output files, so duplicates are rejected.
#[cfg(feature = "cairo-backend")]
fn select_fixtures<'a>(
    gallery: &'a FixtureGallery,
    only: Option<&str>,
) -> Result<Vec<&'a SparklineFixture>, String> {
    let mut seen = std::collections::HashSet::new();
    if let Some(duplicate) = gallery
        .fixtures
        .iter()
        .find(|fixture| !seen.insert(fixture.id.as_str()))
    {
        return Err(format!("duplicate fixture id `{}`", duplicate.id));
    }

    match only {
        None => Ok(gallery.fixtures.iter().collect()),
        Some(id) => gallery
            .fixtures
            .iter()
            .find(|fixture| fixture.id == id)
            .map(|fixture| vec![fixture])
            .ok_or_else(|| {
                let known: Vec<&str> = gallery.fixtures.iter().map(|f| f.id.as_str()).collect();
                format!("no fixture `{id}`; known ids: {}", known.join(", "))
            }),
    }
}

#[cfg(feature = "cairo-backend")]
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs, String> {
    let mut cli = CliArgs {
        manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
        output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
        only_fixture_id: None,
    };

    while let Some(flag) = args.next() {
        if matches!(flag.as_str(), "--help" | "-h") {
            println!("{}", usage_message());
            std::process::exit(0);
        }
        if !matches!(flag.as_str(), "--manifest" | "--output-root" | "--only") {
            return Err(format!("unknown argument `{flag}`\n\n{}", usage_message()));
        }
        let value = args
            .next()
            .ok_or_else(|| format!("missing value for {flag}\n\n{}", usage_message()))?;
        match flag.as_str() {
            "--manifest" => cli.manifest_path = PathBuf::from(value),
            "--output-root" => cli.output_root = PathBuf::from(value),
            _ => cli.only_fixture_id = Some(value),
        }
    }
    Ok(cli)
}

#[cfg(all(test, feature = "cairo-backend"))]
mod tests {
    use super::*;

    fn gallery(ids: &[&str]) -> FixtureGallery {
        FixtureGallery {
            schema_version: 1,
            fixtures: ids
                .iter()
                .map(|id| SparklineFixture {
                    id: (*id).to_owned(),
                    description: String::new(),
                    data: vec![1.0, 2.0],
                    options: StyleConfig::default(),
                })
                .collect(),
        }
    }

    #[test]
    fn only_selects_a_known_fixture() {
        let gallery = gallery(&["pie45", "smooth"]);
        let selected = select_fixtures(&gallery, Some("smooth")).expect("selection");
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "smooth");
        assert_eq!(select_fixtures(&gallery, None).expect("all").len(), 2);
    }

    #[test]
    fn only_rejects_an_unknown_fixture() {
        let err = select_fixtures(&gallery(&["pie45"]), Some("pie46")).expect_err("unknown id");
        assert!(err.contains("pie46"));
        assert!(err.contains("pie45"));
    }

    #[test]
    fn duplicate_fixture_ids_are_rejected() {
        let err = select_fixtures(&gallery(&["bar", "bar"]), None).expect_err("duplicate");
        assert!(err.contains("duplicate fixture id `bar`"));
    }

    #[test]
    fn flags_need_values() {
        let args = ["--only".to_owned()];
        assert!(parse_args(args.into_iter()).is_err());

        let args = ["--only", "pie45", "--output-root", "/tmp/out"].map(str::to_owned);
        let cli = parse_args(args.into_iter()).expect("cli");
        assert_eq!(cli.only_fixture_id.as_deref(), Some("pie45"));
        assert_eq!(cli.output_root, PathBuf::from("/tmp/out"));
    }
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "Usage: cargo run --features cairo-backend --bin render_sparkline_fixtures -- [options]\n\nOptions:\n  --manifest <path>      Fixture gallery path (default: {DEFAULT_MANIFEST_PATH})\n  --output-root <path>   Directory receiving <fixture-id>.png (default: {DEFAULT_OUTPUT_ROOT})\n  --only <fixture-id>    Render a single fixture by id\n  -h, --help             Show this message"
    )
}
