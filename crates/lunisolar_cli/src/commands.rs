//! Subcommand implementations.

use anyhow::{Context, Result, bail};
use lunisolar_calendar::LunisolarCalendar;
use lunisolar_ephem::EventTable;
use tracing::info;

use crate::cli::{BatchArgs, ConvertArgs, MonthsArgs};
use crate::config::LunisolarToml;
use crate::render;

fn build_calendar(config: &LunisolarToml) -> Result<LunisolarCalendar<EventTable>> {
    let path = config.events_path()?;
    let table = EventTable::load(path)
        .with_context(|| format!("failed to load event table: {}", path.display()))?;
    info!(
        path = %path.display(),
        new_moons = table.new_moons().len(),
        terms = table.principal_terms().len(),
        "event table loaded"
    );
    Ok(LunisolarCalendar::new(table).with_config(config.conversion_config())?)
}

pub fn convert(args: ConvertArgs) -> Result<()> {
    let config = LunisolarToml::resolve(&args.common)?;
    let calendar = build_calendar(&config)?;
    let time = args.time.as_deref().unwrap_or(&config.time);

    let date = calendar
        .convert(&args.date, time, &config.timezone)
        .with_context(|| format!("failed to convert {} {time}", args.date))?;
    let input = format!("{} {time} {}", args.date, config.timezone);
    print!("{}", render::date_report(&input, &date));
    Ok(())
}

pub fn batch(args: BatchArgs) -> Result<()> {
    let config = LunisolarToml::resolve(&args.common)?;
    let calendar = build_calendar(&config)?;
    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read batch input: {}", args.input.display()))?;
    let entries = parse_batch_input(&content, &config.time)?;

    let results = calendar.convert_batch(&entries, &config.timezone);
    for ((date, time), result) in entries.iter().zip(&results) {
        println!("{}", render::batch_line(&format!("{date} {time}"), result));
    }
    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(entries = entries.len(), failed, "batch complete");
    Ok(())
}

pub fn months(args: MonthsArgs) -> Result<()> {
    let config = LunisolarToml::resolve(&args.common)?;
    let calendar = build_calendar(&config)?;
    let months = calendar
        .lunar_year_months(args.year)
        .with_context(|| format!("failed to list lunar year {}", args.year))?;
    print!("{}", render::month_table(args.year, &months));
    Ok(())
}

/// `(date, time)` pairs from batch input; lines without a time get `default_time`.
fn parse_batch_input(content: &str, default_time: &str) -> Result<Vec<(String, String)>> {
    let mut entries = Vec::new();
    for (i, raw) in content.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => {}
            [date] => entries.push((date.to_string(), default_time.to_string())),
            [date, time] => entries.push((date.to_string(), time.to_string())),
            _ => bail!("batch input line {}: expected `DATE [TIME]`, got {line:?}", i + 1),
        }
    }
    Ok(entries)
}
