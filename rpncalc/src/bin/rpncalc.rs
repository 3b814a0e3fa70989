use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use rpncalc::{tokenize, EvalContext, RPNExpr, ShuntingParser};

#[derive(Parser)]
#[command(name = "rpncalc", version)]
#[command(about = "Convert infix arithmetic to reverse polish notation and evaluate it")]
struct Cli {
    /// Expression to evaluate. Starts a REPL when omitted
    expr: Vec<String>,
    /// Input is already in postfix notation
    #[arg(short, long)]
    postfix: bool,
    /// Print the postfix form along with the result
    #[arg(short = 'r', long)]
    show_rpn: bool,
    /// Fail when operands are left over below the result
    #[arg(short, long)]
    strict: bool,
    /// More logging, repeat for more detail (RUST_LOG takes precedence)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn process(input: &str, postfix: bool, cx: &EvalContext) -> Result<(RPNExpr, f64), String> {
    let rpn = if postfix {
        RPNExpr(input.split_whitespace().map(String::from).collect())
    } else {
        let tokens = tokenize(input);
        log::debug!("tokens: {:?}", tokens);
        ShuntingParser::new().parse(&tokens)
            .map_err(|e| format!("Parse error: {}", e))?
    };
    log::debug!("rpn: {}", rpn);
    let result = cx.eval(rpn.iter())
        .map_err(|e| format!("Eval error: {}", e))?;
    log::trace!("{} = {}", rpn, result);
    Ok((rpn, result))
}

fn repl(cli: &Cli, cx: &EvalContext) -> Result<(), String> {
    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    log::info!("postfix input: {}, strict: {}", cli.postfix, cx.strict);
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match process(&line, cli.postfix, cx) {
                    Ok((rpn, result)) => println!("{} = {}", rpn, result),
                    Err(e) => println!("{}", e),
                }
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let cx = EvalContext{strict: cli.strict};

    if cli.expr.is_empty() {
        return match repl(&cli, &cx) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    let input = cli.expr.join(" ");
    match process(&input, cli.postfix, &cx) {
        Ok((rpn, result)) if cli.show_rpn => println!("{} = {}", rpn, result),
        Ok((_, result)) => println!("{}", result),
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
