use std::{env, path::PathBuf, process};

use pf_ledger::{
    cli::output,
    currency::LocaleConfig,
    init,
    input::{seed, YearInput},
    report::{document, DocumentLayout, Statement},
    utils::persistence,
};

fn main() {
    init();

    if let Err(err) = run() {
        output::error(err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });

    match command.as_str() {
        "demo" => {
            let rate = args
                .next()
                .map(|raw| raw.parse::<f64>())
                .transpose()?
                .unwrap_or(12.0);
            let input = seed::reference_1997(rate);
            print_statement(&input)?;
        }
        "new" => {
            let start_year: i32 = next_arg(&mut args).parse()?;
            let opening_balance: f64 = next_arg(&mut args).parse()?;
            let rate = args
                .next()
                .map(|raw| raw.parse::<f64>())
                .transpose()?
                .unwrap_or(0.0);
            let input = YearInput::blank(start_year, opening_balance, rate);
            println!("{}", serde_json::to_string_pretty(&input)?);
        }
        "run" => {
            let path = PathBuf::from(next_arg(&mut args));
            let input = persistence::load_year_from_file(&path)?;
            print_statement(&input)?;
        }
        "export" => {
            let input_path = PathBuf::from(next_arg(&mut args));
            let output_path = PathBuf::from(next_arg(&mut args));
            let input = persistence::load_year_from_file(&input_path)?;
            let statement = statement_for(&input)?;
            let rendered = document::render(&statement, DocumentLayout::default());
            std::fs::write(&output_path, rendered)?;
            output::success(format!("Exported statement to {}", output_path.display()));
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn statement_for(input: &YearInput) -> Result<Statement, Box<dyn std::error::Error>> {
    let run = input.compute()?;
    Ok(Statement::from_run(
        input.financial_year(),
        &run,
        LocaleConfig::default(),
    ))
}

fn print_statement(input: &YearInput) -> Result<(), Box<dyn std::error::Error>> {
    let statement = statement_for(input)?;
    output::section(format!(
        "PF Ledger {}",
        statement.fiscal_year.span_label()
    ));
    println!("{}", statement.render_table());
    println!();
    for line in statement.summary_lines() {
        output::info(line);
    }
    Ok(())
}

fn next_arg(args: &mut impl Iterator<Item = String>) -> String {
    args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    })
}

fn print_usage() {
    eprintln!(
        "Usage: pf_ledger_cli <command>\n\
         Commands:\n  \
         demo [rate]\n  \
         new <start_year> <opening_balance> [rate]\n  \
         run <input.json>\n  \
         export <input.json> <out.txt>"
    );
}
