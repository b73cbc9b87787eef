use anyhow::{Context, Result, bail};
use tracing::warn;

use ll_defense::config::Settings;
use ll_defense::defense::current_season_span;
use ll_defense::report::{best_defenders, measure_player};
use ll_defense::session::Session;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = Settings::from_env()?;

    match args.first().map(String::as_str) {
        Some("people") => run_people(&settings),
        Some("best") => {
            let season = args
                .get(1)
                .map(|v| v.parse::<u32>().context("season must be a number"))
                .transpose()?
                .or(settings.season)
                .context("no season given (arg or LL_SEASON)")?;
            let division = args
                .get(2)
                .cloned()
                .or_else(|| settings.division.clone())
                .context("no division given (arg or LL_DIVISION)")?;
            run_best(&settings, season, &division)
        }
        _ => bail!("usage: ll_defense <people | best [season] [division]>"),
    }
}

/// Print the defensive record of every configured player, season by season.
fn run_people(settings: &Settings) -> Result<()> {
    if settings.people.is_empty() {
        bail!("LL_PEOPLE is empty, nobody to analyze");
    }
    let session = Session::login(&settings.login_url, &settings.username, &settings.password)?;
    let span = current_season_span();
    for name in &settings.people {
        println!("\nRESULTS FOR {name}\n");
        let seasons = match measure_player(&session, name, span) {
            Ok(seasons) => seasons,
            Err(err) => {
                warn!(player = name.as_str(), error = %err, "analysis failed, moving on");
                continue;
            }
        };
        for sd in &seasons {
            println!("League: {}", sd.season);
            if settings.verbose {
                for sw in &sd.swings {
                    println!(
                        "game {} turned a {} into a {}",
                        sw.game,
                        sw.from.label(),
                        sw.to.label()
                    );
                }
            }
            println!(
                "net gain or loss, total effect: {}, {}",
                sd.stat.net, sd.stat.total
            );
        }
    }
    Ok(())
}

/// Print the best defender(s) of a division for one season.
fn run_best(settings: &Settings, season: u32, division: &str) -> Result<()> {
    let session = Session::login(&settings.login_url, &settings.username, &settings.password)?;
    let best = best_defenders(&session, season, division)?;
    if settings.verbose {
        println!("{:?}", best.roster);
        for (name, stat) in &best.evaluated {
            println!(
                "{name} net gain or loss, total effect: {}, {}",
                stat.net, stat.total
            );
        }
    }
    println!("The highest defensive rating is: {}", best.rating);
    println!("    set by: {}", best.names.join(", "));
    Ok(())
}
