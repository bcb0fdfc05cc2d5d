use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use ziwei_base::{
    ALL_BRANCHES, ALL_BUREAUS, ALL_TRANSFORMATIONS, EarthlyBranch, HeavenlyStem, bureau_for,
    sihua_row,
};
use ziwei_engine::{OverlayPalace, ZIWEI_TABLE};
use ziwei_rs::{
    BirthRecord, Chart, ChartService, ChartView, Gender, Selection, ServiceConfig, StarInfo,
};

#[derive(Parser)]
#[command(name = "ziwei", about = "ZiWei Dou Shu chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Natal chart, optionally with a major period and fleeting year overlay
    Chart {
        /// Birth date (YYYY-MM-DD), Gregorian unless --lunar
        #[arg(long)]
        date: String,
        /// Civil birth hour (0-23)
        #[arg(long)]
        hour: u8,
        /// male | female
        #[arg(long)]
        gender: String,
        /// Interpret --date as a lunar date
        #[arg(long)]
        lunar: bool,
        /// Lunar month is intercalary (with --lunar)
        #[arg(long)]
        leap: bool,
        /// Major period index to overlay (0-11)
        #[arg(long)]
        period: Option<u8>,
        /// Calendar year to overlay as the fleeting year
        #[arg(long)]
        year: Option<i32>,
        /// Service config file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Lunar table file (TOML), overrides the config
        #[arg(long)]
        table: Option<PathBuf>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Four transformations for a heavenly stem
    Sihua {
        /// Stem as 甲..癸 or pinyin (jia..gui)
        stem: String,
    },
    /// ZiWei branch for every bureau and lunar day
    ZiweiTable,
    /// Five Elements bureau for a year stem and Life Palace branch
    Bureau {
        /// Year stem as 甲..癸 or pinyin
        stem: String,
        /// Life Palace branch as 子..亥 or pinyin; omit for the whole row
        branch: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            date,
            hour,
            gender,
            lunar,
            leap,
            period,
            year,
            config,
            table,
            json,
        } => {
            let (y, m, d) = parse_date(&date).unwrap_or_else(|e| {
                eprintln!("Invalid date: {e}");
                std::process::exit(1);
            });
            let gender = require_gender(&gender);
            let record = if lunar {
                BirthRecord::lunar(y, m, d, leap, hour, gender)
            } else {
                if leap {
                    eprintln!("--leap only applies with --lunar");
                    std::process::exit(1);
                }
                BirthRecord::solar(y, m, d, hour, gender)
            };
            let service = load_service(config, table);
            let selection = Selection { period, year };
            debug!(?record, ?selection, "chart request");
            let v = service.view(&record, selection).unwrap_or_else(|e| {
                eprintln!("Chart failed: {e}");
                std::process::exit(1);
            });
            if json {
                print_json(&*v);
            } else {
                print_view(&v);
            }
        }

        Commands::Sihua { stem } => {
            let stem = require_stem(&stem);
            let row = sihua_row(stem);
            print!("{stem}:");
            for (t, star) in ALL_TRANSFORMATIONS.iter().zip(row) {
                print!(" {star}{}", t.short_name());
            }
            println!();
        }

        Commands::ZiweiTable => {
            print!("    ");
            for day in 1..=30 {
                print!("{day:>3}");
            }
            println!();
            for (bureau, row) in ALL_BUREAUS.iter().zip(ZIWEI_TABLE.iter()) {
                print!("{}", bureau.name());
                for branch in row {
                    print!("{:>2}", branch.name());
                }
                println!();
            }
        }

        Commands::Bureau { stem, branch } => {
            let stem = require_stem(&stem);
            match branch {
                Some(b) => {
                    let branch = require_branch(&b);
                    println!("{stem} {branch}: {}", bureau_for(stem, branch).name());
                }
                None => {
                    for branch in ALL_BRANCHES {
                        println!("{stem} {branch}: {}", bureau_for(stem, branch).name());
                    }
                }
            }
        }
    }
}

fn parse_date(s: &str) -> Result<(i32, u8, u8), String> {
    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("year: {e}"))?;
    let month: u8 = parts[1].parse().map_err(|e| format!("month: {e}"))?;
    let day: u8 = parts[2].parse().map_err(|e| format!("day: {e}"))?;
    Ok((year, month, day))
}

fn require_gender(s: &str) -> Gender {
    Gender::parse(s).unwrap_or_else(|| {
        eprintln!("Invalid gender: {s}");
        eprintln!("Valid: male, female");
        std::process::exit(1);
    })
}

fn require_stem(s: &str) -> HeavenlyStem {
    HeavenlyStem::parse(s).unwrap_or_else(|| {
        eprintln!("Invalid stem: {s} (甲..癸 or jia..gui)");
        std::process::exit(1);
    })
}

fn require_branch(s: &str) -> EarthlyBranch {
    EarthlyBranch::parse(s).unwrap_or_else(|| {
        eprintln!("Invalid branch: {s} (子..亥 or zi..hai)");
        std::process::exit(1);
    })
}

fn load_service(config: Option<PathBuf>, table: Option<PathBuf>) -> ChartService {
    let mut config = match config {
        Some(path) => ServiceConfig::from_file(&path).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }),
        None => ServiceConfig::default(),
    };
    if table.is_some() {
        config.calendar_table = table;
    }
    ChartService::new(&config).unwrap_or_else(|e| {
        eprintln!("Failed to start chart service: {e}");
        std::process::exit(1);
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize: {e}");
            std::process::exit(1);
        }
    }
}

fn star_label(info: &StarInfo) -> String {
    let mut s = info.star.name().to_string();
    if let Some(b) = info.brightness {
        s.push('(');
        s.push_str(b.name());
        s.push(')');
    }
    if let Some(t) = info.transformation {
        s.push_str(t.short_name());
    }
    s
}

fn overlay_label(palaces: Option<&[OverlayPalace]>, branch: EarthlyBranch) -> String {
    palaces
        .and_then(|ps| ps.iter().find(|p| p.branch == branch))
        .map(|p| p.label.clone())
        .unwrap_or_default()
}

fn print_header(chart: &Chart) {
    let b = &chart.birth;
    let pillars: Vec<String> = b.pillars().iter().map(|p| p.name()).collect();
    println!("Lunar:     {}", b.lunar);
    println!("Pillars:   {}", pillars.join(" "));
    println!(
        "Bureau:    {}  Direction: {}",
        chart.bureau.name(),
        chart.direction.name()
    );
    let body_palace = chart.frame.body_palace_name();
    println!(
        "Life:      {}  Body: {} ({} {}){}",
        chart.life_branch(),
        chart.body_branch(),
        body_palace.name(),
        body_palace.english_name(),
        if chart.frame.body_in_life { "  命身同宫" } else { "" }
    );
    let square: Vec<&str> = chart
        .palace(chart.life_branch())
        .relations
        .four_directions()
        .iter()
        .map(|b| b.name())
        .collect();
    println!(
        "三方四正:  {} ({} triad)",
        square.join(" "),
        chart.life_branch().triad().element().english_name()
    );
    println!("命主/身主:  {} / {}", chart.ming_zhu, chart.shen_zhu);
    let sihua: Vec<String> = chart
        .natal_sihua
        .entries
        .iter()
        .map(|e| format!("{}{}", e.star, e.transformation.short_name()))
        .collect();
    println!("Natal 四化: {} ({})", sihua.join(" "), chart.natal_sihua.stem);
    if let Some(empty) = &chart.empty_life_palace {
        let stars: Vec<String> = empty
            .opposite_main_stars
            .iter()
            .map(|s| s.to_string())
            .collect();
        println!("命宫无主星; {} 宫: {}", empty.opposite, stars.join(" "));
    }
}

fn print_view(v: &ChartView) {
    let chart = &*v.chart;
    print_header(chart);

    let period_palaces = v.period.as_ref().map(|p| p.palaces.as_slice());
    let year_palaces = v.fleeting_year.as_ref().map(|y| y.palaces.as_slice());

    println!();
    for palace in &chart.palaces {
        let period = &chart.major_periods[palace.major_period as usize];
        let mut marks = String::new();
        if palace.is_body_palace {
            marks.push_str(" 身");
        }
        if palace.is_laiyin_palace {
            marks.push_str(" 来因");
        }
        let stars: Vec<String> = palace.stars.iter().map(star_label).collect();
        println!(
            "{}{} {:<4}{:<4}{:<4} {:>3}-{:<3}{} | {}",
            palace.stem,
            palace.branch,
            palace.name.name(),
            overlay_label(period_palaces, palace.branch),
            overlay_label(year_palaces, palace.branch),
            period.start_age,
            period.end_age,
            marks,
            stars.join(" ")
        );
    }

    if let Some(p) = &v.period {
        let sihua: Vec<String> = p
            .period
            .sihua
            .entries
            .iter()
            .map(|e| format!("{}{}@{}", e.star, e.transformation.short_name(), e.palace.short_name()))
            .collect();
        println!();
        println!(
            "大限 {} {} ages {}-{}: {}",
            p.period.index,
            p.period.ganzhi,
            p.period.start_age,
            p.period.end_age,
            sihua.join(" ")
        );
    }
    if let Some(y) = &v.fleeting_year {
        let sihua: Vec<String> = y
            .sihua
            .entries
            .iter()
            .map(|e| format!("{}{}@{}", e.star, e.transformation.short_name(), e.palace.short_name()))
            .collect();
        if v.period.is_none() {
            println!();
        }
        let period = y
            .major_period
            .map(|i| format!("大限 {i}"))
            .unwrap_or_else(|| "before first period".to_string());
        println!(
            "流年 {} {} age {} ({}): {}",
            y.year,
            y.ganzhi,
            y.nominal_age,
            period,
            sihua.join(" ")
        );
    }
}
