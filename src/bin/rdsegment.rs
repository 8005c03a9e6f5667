use std::io::Write;

use clap::{Args, Parser, Subcommand};
use rdsegment::{Segment, model::RawSegment};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

/// A program to inspect a file's content as a resource dump segment
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: CliCommands,

    /// Verbose mode
    #[clap(short, long, global=true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum CliCommands {
    #[clap(about = "Get information on the segment")]
    Get(InspectCommand),
}

#[derive(Debug, Args)]
struct InspectCommand {
    #[clap(subcommand)]
    command: SubInspectCommands,
}

#[derive(Debug, Subcommand)]
enum SubInspectCommands {
    #[clap(alias = "s", about = "Print the segment's size in bytes")]
    Size(SourceArgs),
    #[clap(alias = "t", about = "Print the segment's type")]
    Type(TypeInspectCommand),
    #[clap(alias = "d", about = "Print the segment's payload")]
    Data(DataInspectCommand),
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Path to the file holding the segment's payload
    file: std::path::PathBuf,
}

#[derive(Debug, Args)]
struct TypeInspectCommand {
    #[clap(flatten)]
    source: SourceArgs,

    #[clap(long("type"), default_value = "RAW", help("Type label to attach to the segment"))]
    label: String,
}

#[derive(Debug, Args)]
struct DataInspectCommand {
    #[clap(flatten)]
    source: SourceArgs,

    #[clap(long, help("Print the payload as a hex string instead of raw bytes"))]
    hex: bool,
}

fn load_segment(source: &SourceArgs, label: &str) -> Result<RawSegment<String>, std::io::Error> {
    let content = std::fs::read(&source.file)?;
    debug!(file = %source.file.display(), size = content.len(), "loaded segment");
    Ok(RawSegment::with_data(label.to_owned(), content))
}

/// Write the requested segment information to `out`
fn inspect<W: Write>(command: &SubInspectCommands, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        SubInspectCommands::Size(source) => {
            let segment = load_segment(source, "RAW")?;
            writeln!(out, "{}", segment.size())?;
        },
        SubInspectCommands::Type(type_args) => {
            let segment = load_segment(&type_args.source, &type_args.label)?;
            writeln!(out, "{}", segment.kind())?;
        },
        SubInspectCommands::Data(data_args) => {
            let segment = load_segment(&data_args.source, "RAW")?;
            write_data(&segment, data_args.hex, out)?;
        },
    }
    Ok(())
}

/// Write a segment's payload, raw or as a lowercase hex line
fn write_data<S, W>(segment: &S, as_hex: bool, out: &mut W) -> Result<(), Box<dyn std::error::Error>>
where
    S: Segment<Data = [u8]> + ?Sized,
    W: Write,
{
    let data = segment.data()?;
    if as_hex {
        writeln!(out, "{}", hex::encode(data))?;
    } else {
        out.write_all(data)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        CliCommands::Get(inspect_args) => {
            inspect(&inspect_args.command, &mut std::io::stdout().lock())?;
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");

    fn parse_get(args: &[&str]) -> SubInspectCommands {
        let cli = Cli::try_parse_from(["rdsegment", "get"].iter().chain(args.iter())).unwrap();
        match cli.command {
            CliCommands::Get(inspect_args) => inspect_args.command,
        }
    }

    #[test]
    fn hex_output_is_lowercase() {
        let segment = RawSegment::with_data(String::from("RAW"), b"ab\xCA\xFE".to_vec());
        let mut out: Vec<u8> = Vec::new();
        write_data(&segment, true, &mut out).unwrap();
        assert_eq!(out, b"6162cafe\n");
    }

    #[test]
    fn raw_output_is_unchanged() {
        let segment = RawSegment::with_data(String::from("RAW"), vec![0x00, 0xff, 0x0a]);
        let mut out: Vec<u8> = Vec::new();
        write_data(&segment, false, &mut out).unwrap();
        assert_eq!(out, vec![0x00, 0xff, 0x0a]);
    }

    #[test]
    fn unloaded_segment_has_no_data_to_write() {
        let segment = RawSegment::new(String::from("RAW"));
        assert!(write_data(&segment, true, &mut Vec::<u8>::new()).is_err());
    }

    #[test]
    fn type_label_defaults_to_raw() {
        let mut out: Vec<u8> = Vec::new();
        inspect(&parse_get(&["type", MANIFEST]), &mut out).unwrap();
        assert_eq!(out, b"RAW\n");

        let mut out: Vec<u8> = Vec::new();
        inspect(&parse_get(&["type", MANIFEST, "--type", "MENU"]), &mut out).unwrap();
        assert_eq!(out, b"MENU\n");
    }

    #[test]
    fn size_matches_file_length() {
        let expected = std::fs::metadata(MANIFEST).unwrap().len();
        let mut out: Vec<u8> = Vec::new();
        inspect(&parse_get(&["size", MANIFEST]), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", expected));
    }

    #[test]
    fn missing_file_is_an_error() {
        let missing = concat!(env!("CARGO_MANIFEST_DIR"), "/does-not-exist.bin");
        assert!(inspect(&parse_get(&["size", missing]), &mut Vec::<u8>::new()).is_err());
        assert!(inspect(&parse_get(&["data", "--hex", missing]), &mut Vec::<u8>::new()).is_err());
    }
}
