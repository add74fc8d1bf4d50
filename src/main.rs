use clap::Parser;
use flat_calc::{evaluate, Result};
use std::io::{Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Evaluates an arithmetic expression from left to right", long_about = None)]
struct Args {
    /// Expression to evaluate; read from standard input when omitted
    expression: Option<String>,

    /// Read the expression from a file instead
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Print only the result
    #[arg(short, long)]
    quiet: bool,
}

fn strip_line_end(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

fn read_input(args: &Args, stdin: &mut impl Read) -> Result<String> {
    if let Some(expression) = &args.expression {
        return Ok(expression.clone());
    }

    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            stdin.read_to_string(&mut text)?;
            text
        },
    };
    Ok(strip_line_end(text))
}

fn run(args: &Args, stdin: &mut impl Read, out: &mut impl Write) -> Result<()> {
    let input = read_input(args, stdin)?;
    log::info!("evaluating {input:?}");
    let result = evaluate(&input)?;

    if args.quiet {
        writeln!(out, "{result}")?;
    } else {
        writeln!(out, "{input}= {result}")?;
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args, &mut std::io::stdin(), &mut std::io::stdout()) {
        eprintln!("Error, {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flat_calc::CalcError;

    fn output(argv: &[&str], stdin: &str) -> Result<String> {
        let args = Args::parse_from(std::iter::once("flat_calc").chain(argv.iter().copied()));
        let mut out = Vec::new();
        run(&args, &mut stdin.as_bytes(), &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn strips_one_line_end() {
        assert_eq!(strip_line_end("1+1\n".into()), "1+1");
        assert_eq!(strip_line_end("1+1\r\n".into()), "1+1");
        assert_eq!(strip_line_end("1+1\n\n".into()), "1+1\n");
        assert_eq!(strip_line_end("1+1".into()), "1+1");
    }

    #[test]
    fn expression_argument_wins() {
        assert_eq!(output(&["9+8"], "1+1\n").unwrap(), "9+8= 17\n");
    }

    #[test]
    fn prints_input_and_result() {
        assert_eq!(output(&["5+5-1*2/3"], "").unwrap(), "5+5-1*2/3= 6\n");
    }

    #[test]
    fn quiet_prints_result_only() {
        assert_eq!(output(&["-q", "5-9"], "").unwrap(), "-4\n");
        assert_eq!(output(&["--quiet", "100+50"], "").unwrap(), "150\n");
    }

    #[test]
    fn reads_stdin_when_no_expression() {
        assert_eq!(output(&[], "1+1\n").unwrap(), "1+1= 2\n");
        assert_eq!(output(&["-q"], "10/5\r\n").unwrap(), "2\n");
    }

    #[test]
    fn reads_expression_file() {
        let path = std::env::temp_dir().join(format!("flat_calc_{}.txt", std::process::id()));
        std::fs::write(&path, "5-9\r\n").unwrap();
        let path_arg = path.to_string_lossy().into_owned();

        let printed = output(&["--file", &path_arg], "");
        std::fs::remove_file(&path).unwrap();
        assert_eq!(printed.unwrap(), "5-9= -4\n");
    }

    #[test]
    fn missing_file_is_input_error() {
        let path = std::env::temp_dir().join("flat_calc_no_such_file.txt");
        let path_arg = path.to_string_lossy().into_owned();
        assert!(matches!(output(&["-f", &path_arg], ""), Err(CalcError::input(_))));
    }

    #[test]
    fn failing_expression_writes_nothing() {
        let args = Args::parse_from(["flat_calc", "1#1"]);
        let mut out = Vec::new();
        let err = run(&args, &mut "".as_bytes(), &mut out).unwrap_err();
        assert!(matches!(err, CalcError::undefined_token('#')));
        assert_eq!(err.to_string(), "undefined token, '#', encountered");
        assert!(out.is_empty());
    }

    #[test]
    fn file_and_expression_conflict() {
        assert!(Args::try_parse_from(["flat_calc", "-f", "x.txt", "1+1"]).is_err());
    }
}
