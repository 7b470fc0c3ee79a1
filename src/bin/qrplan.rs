use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use flexi_logger::Logger;
use qr_plan::config::{debug_enabled, quiet_zone, render_scale};
use qr_plan::encoder::format::{format_codeword, format_info};
use qr_plan::encoder::version::version_info;
use qr_plan::tools::{role_counts, role_image};
use qr_plan::{ECLevel, MaskPattern, PixelRole, Plan, build_mask_candidates, build_plan};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "qrplan", version, about = "QR code layout planner tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a plan as text, one character per module
    Show {
        #[command(flatten)]
        symbol: SymbolArgs,
    },
    /// Write a role-colored PNG of a plan
    Roles {
        #[command(flatten)]
        symbol: SymbolArgs,
        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,
        /// Pixels per module (defaults to QR_PLAN_SCALE or 8)
        #[arg(long)]
        scale: Option<usize>,
        /// Light border in modules (defaults to QR_PLAN_QUIET_ZONE or 4)
        #[arg(long)]
        quiet_zone: Option<usize>,
    },
    /// List the format words for every level and mask
    Format,
    /// Print role counts and codeword capacity of a plan
    Stats {
        #[command(flatten)]
        symbol: SymbolArgs,
    },
    /// Build all eight mask candidates and summarize them
    Masks {
        /// QR version (1-40)
        #[arg(long, default_value_t = 1)]
        version: u8,
        /// Error correction level
        #[arg(long, value_enum, default_value_t = LevelArg::M)]
        level: LevelArg,
    },
}

#[derive(Args)]
struct SymbolArgs {
    /// QR version (1-40)
    #[arg(long, default_value_t = 1)]
    version: u8,
    /// Error correction level
    #[arg(long, value_enum, default_value_t = LevelArg::M)]
    level: LevelArg,
    /// Mask pattern id
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..8))]
    mask: u8,
}

impl SymbolArgs {
    fn build(&self) -> Result<Plan> {
        let mask = MaskPattern::from_bits(self.mask)
            .with_context(|| format!("mask {} out of range", self.mask))?;
        build_plan(self.version, self.level.into(), mask)
            .with_context(|| format!("failed to build plan for version {}", self.version))
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LevelArg {
    L,
    M,
    Q,
    H,
}

impl From<LevelArg> for ECLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::L => ECLevel::L,
            LevelArg::M => ECLevel::M,
            LevelArg::Q => ECLevel::Q,
            LevelArg::H => ECLevel::H,
        }
    }
}

fn main() -> Result<()> {
    let default_level = if debug_enabled() { "debug" } else { "warn" };
    let _logger = Logger::try_with_env_or_str(default_level)
        .context("invalid log specification")?
        .log_to_stderr()
        .start()
        .context("failed to start logger")?;

    let cli = Cli::parse();

    match cli.command {
        Command::Show { symbol } => show_cmd(&symbol),
        Command::Roles {
            symbol,
            output,
            scale,
            quiet_zone: border,
        } => roles_cmd(
            &symbol,
            &output,
            scale.unwrap_or_else(render_scale),
            border.unwrap_or_else(quiet_zone),
        ),
        Command::Format => {
            format_cmd();
            Ok(())
        }
        Command::Stats { symbol } => stats_cmd(&symbol),
        Command::Masks { version, level } => masks_cmd(version, level.into()),
    }
}

fn show_cmd(symbol: &SymbolArgs) -> Result<()> {
    let plan = symbol.build()?;
    println!(
        "version={} level={} mask={} size={}",
        plan.version,
        plan.level,
        plan.mask,
        plan.size()
    );
    print!("{}", plan);
    Ok(())
}

fn roles_cmd(symbol: &SymbolArgs, output: &Path, scale: usize, border: usize) -> Result<()> {
    let plan = symbol.build()?;
    let img = role_image(&plan, scale, border);
    img.save(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!(
        "Wrote {} ({}x{} px, version {})",
        output.display(),
        img.width(),
        img.height(),
        plan.version
    );
    Ok(())
}

fn format_cmd() {
    println!("level mask  codeword  drawn");
    for level in ECLevel::ALL {
        for mask in MaskPattern::ALL {
            println!(
                "{:>5} {:>4}  0x{:04X}    0x{:04X}",
                level.to_string(),
                mask.to_string(),
                format_codeword(level, mask),
                format_info(level, mask)
            );
        }
    }
}

fn stats_cmd(symbol: &SymbolArgs) -> Result<()> {
    let plan = symbol.build()?;
    println!(
        "version={} level={} mask={} size={}",
        plan.version,
        plan.level,
        plan.mask,
        plan.size()
    );
    for (role, count) in role_counts(&plan) {
        println!("  {:<10} {:>6}", role.to_string(), count);
    }
    println!(
        "codewords: total={} data={} check={} blocks={}",
        plan.total_bytes(),
        plan.data_bytes,
        plan.check_bytes,
        plan.blocks
    );
    if let Some(word) = version_info(plan.version) {
        println!("version info: 0x{:05X}", word);
    }
    Ok(())
}

fn masks_cmd(version: u8, level: ECLevel) -> Result<()> {
    let plans = build_mask_candidates(version, level)
        .with_context(|| format!("failed to build mask candidates for version {}", version))?;
    for plan in &plans {
        let inverted = plan
            .grid
            .iter()
            .filter(|(_, _, p)| p.role() == PixelRole::Data && p.is_inverted())
            .count();
        println!(
            "mask {}: format=0x{:04X} inverted_data={}",
            plan.mask,
            format_info(plan.level, plan.mask),
            inverted
        );
    }
    Ok(())
}
