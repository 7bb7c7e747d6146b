use clap::Parser;
use modulus_cli::api_client::ApiClient;
use modulus_core::num;
use modulus_core::query::{ModExp, ModExpQuery};
use num_bigint::BigUint;

/// Modulus command line client
///
/// Sends one modular exponentiation to a modulus server and prints the
/// result.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the server
    #[arg(
        short,
        long,
        default_value = "http://127.0.0.1:8081",
        env = "MODULUS_SERVER"
    )]
    server: String,

    /// Modulus, a positive decimal integer
    #[arg(short, long, value_parser = parse_number)]
    modulus: BigUint,

    /// Base, a non-negative decimal integer
    #[arg(short, long, value_parser = parse_number)]
    base: BigUint,

    /// Exponent, a non-negative decimal integer
    #[arg(short, long, value_parser = parse_number)]
    exponent: BigUint,

    /// Print the full response echo instead of only the result
    #[arg(long)]
    full: bool,
}

fn parse_number(text: &str) -> Result<BigUint, String> {
    num::decode(text).map_err(|err| err.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut query = ModExpQuery::new(vec![ModExp::new(cli.modulus, cli.base, cli.exponent)]);
    if cli.full {
        query.brief = Some(false);
    }

    let client = ApiClient::new(&cli.server);
    let response = client.query(&query).await?;

    if cli.full {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        match response.modexps.first().and_then(|modexp| modexp.result.as_ref()) {
            Some(r) => println!("{}", num::encode(r)),
            None => return Err("server response carried no result".into()),
        }
    }

    Ok(())
}
