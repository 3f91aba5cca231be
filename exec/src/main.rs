// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate semeval;

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
#[macro_use]
extern crate log;
extern crate serde_yaml;
extern crate csv;
extern crate env_logger;
#[macro_use]
extern crate clap;
extern crate prettytable;

use std::path::Path;
use std::fs::File;
use std::io::BufWriter;
use clap::ArgMatches;

use semeval::prelude::*;
use errors::*;

mod errors;
mod input;
mod report;

fn main() {
    env_logger::init();

    let app_m = clap_app!(sdpeval =>
        (version: crate_version!())
        (about: "Compare semantic dependency graphs with labeled and unlabeled precision/recall/F1")
        (@arg settings: -c +takes_value "settings file (yaml)")
        (@arg verbose: -v "print the statistics of every evaluation")
        (@subcommand pair =>
            (about: "Evaluate a guessed passage against its reference")
            (@arg guessed: -g +required +takes_value "guessed graphs (json)")
            (@arg reference: -r +required +takes_value "reference graphs (json)")
            (@arg eval_types: -t +takes_value "comma separated evaluation types [default=labeled,unlabeled]")
            (@arg output: -o +takes_value "write the scores to this json file")
        )
        (@subcommand batch =>
            (about: "Evaluate every pair of a manifest and report the micro-averaged scores")
            (@arg manifest: -i +required +takes_value "manifest file (json)")
            (@arg eval_types: -t +takes_value "comma separated evaluation types [default=labeled,unlabeled]")
            (@arg output: -o +takes_value "write the scores to this csv file")
        )
    ).get_matches();

    if let Err(ref e) = run(&app_m) {
        println!("error: {}", e);
        for e in e.iter().skip(1) {
            println!("caused by: {}", e);
        }

        // The backtrace is not always generated. Try to run this example
        // with `RUST_BACKTRACE=1`.
        if let Some(backtrace) = e.backtrace() {
            println!("{:?}", backtrace);
        }

        ::std::process::exit(1);
    }
}

fn run(app_m: &ArgMatches) -> Result<()> {
    let mut settings = match app_m.value_of("settings") {
        Some(fsettings) => input::load_settings(Path::new(fsettings))?,
        None => Settings::default()
    };
    if app_m.is_present("verbose") {
        settings.verbose = true;
    }
    debug!("Current settings: {:?}", settings);

    match app_m.subcommand() {
        ("pair", Some(sub_m)) => run_pair(&settings, sub_m),
        ("batch", Some(sub_m)) => run_batch(&settings, sub_m),
        _ => bail!("missing subcommand, run with --help to see the available ones")
    }
}

fn get_eval_types(settings: &Settings, sub_m: &ArgMatches) -> Result<Vec<EvalType>> {
    match sub_m.value_of("eval_types") {
        Some(s) => input::parse_eval_types(s),
        None => Ok(settings.eval_types.clone())
    }
}

fn evaluate_files(guessed: &Path, reference: &Path, settings: &Settings, eval_types: &[EvalType]) -> Result<Scores> {
    let guessed_graphs = input::load_json(guessed)?;
    let reference_graphs = input::load_json(reference)?;

    let scores = evaluate_with(&guessed_graphs, &reference_graphs, &JsonConverter, settings.verbose, eval_types)
        .chain_err(|| format!("cannot evaluate {:?} against {:?}", guessed, reference))?;
    Ok(scores)
}

fn run_pair(settings: &Settings, sub_m: &ArgMatches) -> Result<()> {
    let eval_types = get_eval_types(settings, sub_m)?;
    let guessed = Path::new(sub_m.value_of("guessed").unwrap());
    let reference = Path::new(sub_m.value_of("reference").unwrap());

    let scores = evaluate_files(guessed, reference, settings, &eval_types)?;
    let source = guessed.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let rows = vec![(source, scores)];
    report::scores_table(&rows, &rows[0].1, settings.report.precision).printstd();

    if let Some(foutput) = sub_m.value_of("output") {
        serde_json::to_writer_pretty(BufWriter::new(File::create(foutput)?), &rows[0].1)?;
        info!("Scores are written to {}", foutput);
    }

    Ok(())
}

fn run_batch(settings: &Settings, sub_m: &ArgMatches) -> Result<()> {
    let eval_types = get_eval_types(settings, sub_m)?;
    let manifest = input::Manifest::from_file(Path::new(sub_m.value_of("manifest").unwrap()))?;

    let mut rows = Vec::with_capacity(manifest.pairs.len());
    for pair in &manifest.pairs {
        debug!("Evaluating pair {}", pair.id);
        let scores = evaluate_files(&pair.guessed, &pair.reference, settings, &eval_types)
            .chain_err(|| format!("pair `{}` failed", pair.id))?;
        rows.push((pair.id.clone(), scores));
    }

    let total = Scores::aggregate(rows.iter().map(|&(_, ref s)| s));
    info!("Evaluated {} pairs, labeled F1 = {:.4}, unlabeled F1 = {:.4}",
          rows.len(), total.average_f1(EvalType::Labeled), total.average_f1(EvalType::Unlabeled));
    report::scores_table(&rows, &total, settings.report.precision).printstd();

    if let Some(foutput) = sub_m.value_of("output") {
        report::write_csv(BufWriter::new(File::create(foutput)?), &rows, &total, settings.report.precision)?;
        info!("Scores are written to {}", foutput);
    }

    Ok(())
}
