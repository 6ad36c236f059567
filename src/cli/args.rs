use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "prospect-card")]
#[command(
    author,
    version,
    about = "Render a prospect stat card (rankings, projections, scouting grades) as a PNG"
)]
pub struct Args {
    /// Roster CSV with projected stats (defines the internal ranking order)
    #[arg(long, default_value = "plive_hitters.csv")]
    pub roster: PathBuf,

    /// Top 100 CSV (Prospects, Rank)
    #[arg(long, default_value = "plive_top_100.csv")]
    pub top100: PathBuf,

    /// Scouting grades CSV (Name, Position, OFP, Hit, Power, Field, Arm, Run)
    #[arg(long, default_value = "OS_full_org_list.csv")]
    pub scouting: PathBuf,

    /// Team logo CSV (TeamShort, url)
    #[arg(long, default_value = "mlbLogos.csv")]
    pub logos: PathBuf,

    /// Identity cache file (name,id rows); created if missing
    #[arg(long, default_value = "mlbam_id_cache.csv")]
    pub id_cache: PathBuf,

    /// Directory holding people-*.csv registry snapshot files
    #[arg(long, default_value = "people")]
    pub registry: PathBuf,

    /// Optional side table (Name, Team, Level, Position) filling blank roster fields
    #[arg(long)]
    pub attributes: Option<PathBuf>,

    /// Brand mark image drawn next to the footer
    #[arg(long, default_value = "plive_logo.png")]
    pub brand_mark: PathBuf,

    /// Bold font file used for all card text
    #[arg(long, default_value = "cooper-hewitt/CooperHewitt-Bold.otf")]
    pub font_bold: PathBuf,

    /// Bold italic font file used for the footer
    #[arg(long, default_value = "cooper-hewitt/CooperHewitt-BoldItalic.otf")]
    pub font_italic: PathBuf,

    /// Player to render: exact name, 1-based roster index, or unique name fragment
    #[arg(short, long, required_unless_present = "list")]
    pub player: Option<String>,

    /// List the first players of the roster and exit
    #[arg(long)]
    pub list: bool,

    /// Output PNG path (defaults to <Name>_card.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Card arrangement
    #[arg(short = 'l', long, value_enum, default_value = "stacked")]
    pub layout: LayoutVariant,

    /// Never query the remote player-id lookup service
    #[arg(long)]
    pub offline: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arrangement of the info block in the top half of the card
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum LayoutVariant {
    /// Position/level row above two double-height rank panels
    #[default]
    Stacked,
    /// 2x3 grid: position | level, team | score, top 100 | rank
    Grid,
}

impl Args {
    /// Get the output path, defaulting to `<Name_With_Underscores>_card.png`
    pub fn output_path(&self, player_name: &str) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(card_file_name(player_name)))
    }
}

/// File name used when no output path is given
pub fn card_file_name(player_name: &str) -> String {
    format!("{}_card.png", player_name.trim().replace(' ', "_"))
}
