//! # Signcost CLI Application
//!
//! Terminal front end for the pricing engine. Quotes one sign from
//! command-line arguments, using a saved pricing profile or the built-in
//! defaults.
//!
//! ```text
//! price_cli quote --mode printed-vinyl-on-substrate --width 3000 --height 1500 \
//!     --media md3 --substrate foamex-2440x1220-3 --finishing kiss-cut-on-roll
//! price_cli init-profile pricing.json --shop "Acme Signs"
//! price_cli catalog --profile pricing.json
//! ```
//!
//! Set `RUST_LOG=price_core=debug` to see each calculation logged.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use price_core::calculations::SheetFraction;
use price_core::sign::{Complexity, Finishing, PanelOrientation, ProductionMode, SignInput};
use price_core::{load_profile, save_profile, PriceBreakdown, PriceError, PricingProfile};

#[derive(Parser, Debug)]
#[command(author, version, about = "Cost estimates for custom sign production")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price a single sign
    Quote(QuoteArgs),

    /// Write a profile with the default settings and catalogs
    InitProfile {
        /// Where to write the profile
        path: PathBuf,

        /// Shop name stored in the profile header
        #[arg(long, default_value = "")]
        shop: String,
    },

    /// List the media and substrates available for quoting
    Catalog {
        /// Pricing profile to read (defaults are used when omitted)
        #[arg(short, long)]
        profile: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct QuoteArgs {
    /// Production mode, e.g. solid-colour-cut-vinyl, print-and-cut-vinyl,
    /// printed-vinyl-only, printed-vinyl-on-substrate, substrate-only
    #[arg(short, long, value_parser = parse_mode)]
    mode: ProductionMode,

    /// Finished width (mm)
    #[arg(short, long)]
    width: f64,

    /// Finished height (mm)
    #[arg(long)]
    height: f64,

    /// Number of identical signs
    #[arg(short, long, default_value = "1")]
    qty: u32,

    /// Vinyl media id
    #[arg(long)]
    media: Option<String>,

    /// Substrate id
    #[arg(long)]
    substrate: Option<String>,

    /// Print both faces of a mounted sign
    #[arg(long)]
    double_sided: bool,

    /// none, kiss-cut-on-roll, cut-into-sheets, individually-cut
    #[arg(long, value_parser = parse_finishing)]
    finishing: Option<Finishing>,

    /// basic, standard, complex
    #[arg(long, value_parser = parse_complexity)]
    complexity: Option<Complexity>,

    /// Force application tape on or off (mode default when omitted)
    #[arg(long)]
    application_tape: Option<bool>,

    /// Panel splits, 0-6
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..=6))]
    panel_splits: u8,

    /// vertical or horizontal
    #[arg(long, value_parser = parse_orientation)]
    panel_orientation: Option<PanelOrientation>,

    /// Pricing profile to read (defaults are used when omitted)
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Print the breakdown as JSON
    #[arg(long)]
    json: bool,
}

impl QuoteArgs {
    fn to_sign(&self) -> SignInput {
        SignInput {
            mode: self.mode,
            width_mm: self.width,
            height_mm: self.height,
            qty: self.qty,
            media_id: self.media.clone(),
            substrate_id: self.substrate.clone(),
            double_sided: self.double_sided,
            finishing: self.finishing,
            complexity: self.complexity,
            application_tape: self.application_tape,
            panel_splits: self.panel_splits,
            panel_orientation: self.panel_orientation,
        }
    }
}

fn parse_mode(s: &str) -> Result<ProductionMode, String> {
    ProductionMode::from_str_flexible(s).ok_or_else(|| format!("unknown production mode '{}'", s))
}

fn parse_finishing(s: &str) -> Result<Finishing, String> {
    Finishing::from_str_flexible(s).ok_or_else(|| format!("unknown finishing '{}'", s))
}

fn parse_complexity(s: &str) -> Result<Complexity, String> {
    Complexity::from_str_flexible(s).ok_or_else(|| format!("unknown complexity '{}'", s))
}

fn parse_orientation(s: &str) -> Result<PanelOrientation, String> {
    match s.to_lowercase().as_str() {
        "vertical" => Ok(PanelOrientation::Vertical),
        "horizontal" => Ok(PanelOrientation::Horizontal),
        _ => Err(format!("unknown panel orientation '{}'", s)),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::Quote(args) => run_quote(&args),
        Command::InitProfile { path, shop } => run_init_profile(&path, shop),
        Command::Catalog { profile } => run_catalog(profile.as_deref()),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::from(exit_status(&e))
        }
    }
}

/// 2 for bad input or catalog references, 1 for file and format failures.
fn exit_status(error: &PriceError) -> u8 {
    if error.is_validation() {
        2
    } else {
        1
    }
}

fn open_profile(path: Option<&Path>) -> Result<PricingProfile, PriceError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "using pricing profile");
            load_profile(path)
        }
        None => Ok(PricingProfile::default()),
    }
}

fn run_quote(args: &QuoteArgs) -> Result<(), PriceError> {
    let profile = open_profile(args.profile.as_deref())?;
    let sign = args.to_sign();
    let breakdown = profile.price(&sign)?;

    if args.json {
        let json = serde_json::to_string_pretty(&breakdown).map_err(|e| PriceError::SerializationError {
            reason: e.to_string(),
        })?;
        println!("{}", json);
    } else {
        print_breakdown(&sign, &breakdown);
    }
    Ok(())
}

fn run_init_profile(path: &Path, shop: String) -> Result<(), PriceError> {
    let profile = PricingProfile::new(shop);
    save_profile(&profile, path)?;
    println!("Wrote default pricing profile to {}", path.display());
    Ok(())
}

fn run_catalog(path: Option<&Path>) -> Result<(), PriceError> {
    let profile = open_profile(path)?;

    println!("Media:");
    for media in &profile.catalog.media {
        println!("  {:<20} {}", media.id, media.display_name());
    }
    println!();
    println!("Substrates:");
    for substrate in &profile.catalog.substrates {
        println!("  {:<20} {}", substrate.id, substrate.display_name());
    }
    Ok(())
}

fn print_breakdown(sign: &SignInput, b: &PriceBreakdown) {
    println!("═══════════════════════════════════════");
    println!("  {}", sign.mode);
    println!("  {} x {} mm, qty {}", sign.width_mm, sign.height_mm, sign.qty);
    println!("═══════════════════════════════════════");
    println!();
    println!("  Setup:            £{:>9.2}", b.setup);
    println!("  Materials:        £{:>9.2}", b.materials);
    println!("  Ink:              £{:>9.2}", b.ink);
    println!("  Cutting:          £{:>9.2}", b.cutting);
    println!("  Finishing uplift: £{:>9.2}", b.finishing_uplift);
    println!("  Pre-delivery:     £{:>9.2}", b.pre_delivery);
    println!(
        "  Delivery:         £{:>9.2} ({})",
        b.delivery,
        b.delivery_band.as_deref().unwrap_or("no band")
    );
    println!("───────────────────────────────────────");
    println!("  TOTAL:            £{:>9.2}", b.total);
    println!();

    if let Some(lm) = b.vinyl_lm_with_waste {
        println!("  Vinyl:   {:.3} lm incl. waste", lm);
    }
    if let Some(tiles) = b.tiles {
        println!("  Tiles:   {}", tiles);
    }
    if let Some(fraction) = b.sheet_fraction {
        println!(
            "  Sheet:   {} charged, {:.1}% used / {:.1}% waste",
            fraction_label(fraction),
            b.usage_pct.unwrap_or(0.0),
            b.waste_pct.unwrap_or(0.0)
        );
    }
    for note in &b.notes {
        println!("  Note:    {}", note);
    }
}

fn fraction_label(fraction: SheetFraction) -> &'static str {
    match fraction {
        SheetFraction::Quarter => "1/4 sheet",
        SheetFraction::Half => "1/2 sheet",
        SheetFraction::ThreeQuarters => "3/4 sheet",
        SheetFraction::Full => "full sheet",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_args_parse() {
        let cli = Cli::try_parse_from([
            "price_cli",
            "quote",
            "--mode",
            "printed-vinyl-on-substrate",
            "--width",
            "3000",
            "--height",
            "1500",
            "--media",
            "md3",
            "--substrate",
            "foamex-2440x1220-3",
            "--finishing",
            "kiss-cut-on-roll",
            "--application-tape",
            "false",
        ])
        .unwrap();

        let Command::Quote(args) = cli.command else {
            panic!("expected quote");
        };
        let sign = args.to_sign();
        assert_eq!(sign.mode, ProductionMode::PrintedVinylOnSubstrate);
        assert_eq!(sign.qty, 1);
        assert_eq!(sign.finishing, Some(Finishing::KissCutOnRoll));
        assert_eq!(sign.application_tape, Some(false));

        let breakdown = PricingProfile::default().price(&sign).unwrap();
        assert_eq!(breakdown.total, 185.08);
    }

    #[test]
    fn test_exit_status_separates_validation_errors() {
        let sign = SignInput::new(ProductionMode::PrintedVinylOnly, 1000.0, 500.0, 1);
        let err = PricingProfile::default().price(&sign).unwrap_err();
        assert_eq!(exit_status(&err), 2);

        let err = open_profile(Some(Path::new("/nonexistent/pricing.json"))).unwrap_err();
        assert_eq!(exit_status(&err), 1);
    }

    #[test]
    fn test_bad_mode_rejected() {
        let result = Cli::try_parse_from(["price_cli", "quote", "--mode", "neon", "--width", "1", "--height", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_panel_splits_range() {
        let result = Cli::try_parse_from([
            "price_cli", "quote", "--mode", "substrate-only", "--width", "1", "--height", "1", "--panel-splits", "7",
        ]);
        assert!(result.is_err());
    }
}
