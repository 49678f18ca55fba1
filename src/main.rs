use std::{env, fs::read_to_string, process::ExitCode, time::Instant};

use anyhow::{anyhow, bail, Context};
use lexis::{
    display_error,
    errors::errors::{Error, ErrorImpl},
    keywords::RESERVED,
    lexer::{check_tokens, tokenize, LexerConfig, Token, UnknownPolicy, Variant},
};
use log::{error, info};

struct Options {
    config: LexerConfig,
    strict: bool,
    kth: Option<usize>,
    file: Option<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    match run(env::args().skip(1).collect()) {
        Ok(code) => code,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> anyhow::Result<ExitCode> {
    let options = parse_args(args)?;

    if let Some(k) = options.kth {
        match RESERVED.kth_word(k) {
            Ok(word) => println!("{}", word),
            Err(err) => {
                display_error(&err, "<reserved words>", "");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    let Some(file) = options.file else {
        if options.kth.is_none() {
            print_usage();
        }
        return Ok(ExitCode::SUCCESS);
    };

    let source = read_to_string(&file)
        .map_err(|err| {
            Error::new(
                ErrorImpl::SourceRead {
                    path: file.clone(),
                    message: err.to_string(),
                },
                None,
            )
        })
        .with_context(|| format!("loading source for {:?} analyzer", options.config.variant))?;

    let start = Instant::now();
    let tokens = tokenize(&source, &options.config);
    info!("Tokenized {} in {:?}", file, start.elapsed());

    println!("Source code: \n{}\n\n", source);
    println!("Tokens in this source code: \n");
    print_tokens(&tokens);

    if options.strict {
        if let Err(err) = check_tokens(&tokens) {
            display_error(&err, &file, &source);
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(args: Vec<String>) -> anyhow::Result<Options> {
    let mut options = Options {
        config: LexerConfig::default(),
        strict: false,
        kth: None,
        file: None,
    };

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            "--variant" => {
                let value = args.next().context("--variant requires an argument")?;
                let variant: Variant = value.parse().map_err(|err: String| anyhow!(err))?;
                options.config = options.config.with_variant(variant);
            }
            "--positions" => options.config = options.config.with_positions(true),
            "--skip-unknown" => {
                options.config = options.config.with_unknown_policy(UnknownPolicy::Skip)
            }
            "--strict" => options.strict = true,
            "--kth" => {
                let value = args.next().context("--kth requires an argument")?;
                let k = value
                    .parse()
                    .with_context(|| format!("invalid keyword index {:?}", value))?;
                options.kth = Some(k);
            }
            flag if flag.starts_with('-') => bail!("unknown option: {}", flag),
            _ if options.file.is_some() => bail!("only one source file may be given"),
            _ => options.file = Some(arg.clone()),
        }
    }

    Ok(options)
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("{}\n", token);
    }
}

fn print_usage() {
    println!(
        "usage: lexis [--variant dfa|scanner|pattern] [--positions] [--skip-unknown] [--strict] [--kth N] <file>"
    );
}
