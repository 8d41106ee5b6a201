use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "rpncalc", version, about = "Evaluate arithmetic expressions")]
struct Args {
    /// Expression to evaluate, words are joined with spaces. Starts a REPL if omitted
    expr: Vec<String>,

    /// Print tokens, RPN and answer instead of just the answer
    #[arg(long)]
    report: bool,

    /// Run the built-in sample expressions
    #[arg(long, conflicts_with = "expr")]
    demo: bool,

    #[arg(long, env = "RPNCALC_LOG", default_value = "warn")]
    log_level: String,
}

mod repl {
    use rpncalc::{Calculation, EvaluationError, ShuntingParser};

    pub fn evalexpr(input: &str) -> Result<String, EvaluationError> {
        let rpn = ShuntingParser::parse_str(input)?;
        let result = rpn.eval()?;
        match rpn.to_infix() {
            Some(expr) => Ok(format!("{} = {:.2}", expr, result)),
            None => Ok(format!("{:.2}", result)),
        }
    }

    pub fn report(input: &str) -> Result<String, EvaluationError> {
        Calculation::new(input).map(|calc| calc.to_string())
    }

    pub fn demo() {
        for (title, expr) in rpncalc::DEMO_EXPRESSIONS {
            match Calculation::new(expr) {
                Ok(calc) => println!("{}\n{}", title, calc),
                Err(e) => println!("{}\n{}", title, e),
            }
            println!("\n-------------------------\n");
        }
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, String> {
    level.parse::<LevelFilter>().map_err(|e| format!("Bad log level '{}': {}", level, e))
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    let level = parse_level(&args.log_level)?;
    // the default tracing-log bridge forwards the library's log records
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .try_init()
        .map_err(|e| e.to_string())?;

    if args.demo {
        repl::demo();
        return Ok(());
    }

    if !args.expr.is_empty() {
        let input = args.expr.join(" ");
        let output = if args.report { repl::report(&input) } else { repl::evalexpr(&input) };
        match output {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let histpath = home::home_dir().map(|h| h.join(".rpncalc_history"));
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    log::debug!("history entry dropped: {}", e);
                }
                let output = if args.report { repl::report(&line) } else { repl::evalexpr(&line) };
                match output {
                    Ok(out) => println!("{}", out),
                    Err(e) => println!("{}", e),
                }
            }
        }
    }
    if let Some(path) = &histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{parse_level, repl, Args};
    use clap::Parser;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn log_levels() {
        assert_eq!(parse_level("warn"), Ok(LevelFilter::WARN));
        assert_eq!(parse_level("TRACE"), Ok(LevelFilter::TRACE));
        assert_eq!(parse_level("off"), Ok(LevelFilter::OFF));
        assert!(parse_level("loud").is_err());
    }

    #[test]
    fn args() {
        let args = Args::try_parse_from(["rpncalc", "--log-level", "debug", "1", "+", "2"]).unwrap();
        assert_eq!(args.expr, vec!["1", "+", "2"]);
        assert_eq!(args.log_level, "debug");
        assert!(Args::try_parse_from(["rpncalc", "--demo", "1"]).is_err());
    }

    #[test]
    fn evalexpr_output() {
        assert_eq!(repl::evalexpr("(100 + 200)  * 3").unwrap(), "(100 + 200) * 3 = 900.00");
        assert!(repl::evalexpr("(1 + 2").is_err());
    }

    #[test]
    fn evalexpr_long_chain() {
        let expr = vec!["1"; 20_000].join(" + ");
        let out = repl::evalexpr(&expr).unwrap();
        assert!(out.ends_with("1 + 1 = 20000.00"));
    }
}
