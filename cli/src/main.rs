use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hill_crypto::cipher::{Alphabet, Cipher};

#[derive(Parser, Debug)]
#[command(name = "hill", version, about = "Hill cipher over arbitrary alphabets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encrypt a text with a key spelled in the same alphabet
    Encrypt {
        /// The text to encrypt; its length must be a multiple of the key order
        #[arg(short = 't', long = "text")]
        text: String,
        /// The key text; must spell a square matrix invertible in the alphabet
        #[arg(short = 'k', long = "key")]
        key: String,
        /// The alphabet symbols, in index order
        #[arg(short = 'a', long = "alphabet")]
        alphabet: String,
    },
    /// Decrypt a cipher text with the key it was encrypted with
    Decrypt {
        /// The cipher text to decrypt
        #[arg(short = 't', long = "text")]
        text: String,
        /// The key text the cipher text was encrypted with
        #[arg(short = 'k', long = "key")]
        key: String,
        /// The alphabet symbols, in index order
        #[arg(short = 'a', long = "alphabet")]
        alphabet: String,
    },
    /// Generate a random key usable with the given alphabet
    Keygen {
        /// Order of the key matrix; the key text has order squared symbols
        #[arg(short = 'o', long = "order")]
        order: usize,
        /// The alphabet symbols, in index order
        #[arg(short = 'a', long = "alphabet")]
        alphabet: String,
    },
}

fn main() -> Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt {
            text,
            key,
            alphabet,
        } => cmd_encrypt(&text, &key, &alphabet),
        Commands::Decrypt {
            text,
            key,
            alphabet,
        } => cmd_decrypt(&text, &key, &alphabet),
        Commands::Keygen { order, alphabet } => cmd_keygen(order, &alphabet),
    }
}

fn new_cipher(alphabet: &str) -> Result<Cipher> {
    let alphabet = Alphabet::new(alphabet);
    log::trace!("using an alphabet of {} symbols", alphabet.len());
    Cipher::try_with(alphabet).context("failed to create the cipher")
}

fn cmd_encrypt(text: &str, key: &str, alphabet: &str) -> Result<()> {
    let cipher = new_cipher(alphabet)?;
    log::info!(
        "encrypting {} symbols with a {}-symbol key",
        text.chars().count(),
        key.chars().count()
    );
    let cipher_text = cipher.encrypt(text, key).context("encryption failed")?;
    println!("{}", cipher_text);
    Ok(())
}

fn cmd_decrypt(text: &str, key: &str, alphabet: &str) -> Result<()> {
    let cipher = new_cipher(alphabet)?;
    log::info!(
        "decrypting {} symbols with a {}-symbol key",
        text.chars().count(),
        key.chars().count()
    );
    let plain_text = cipher.decrypt(text, key).context("decryption failed")?;
    println!("{}", plain_text);
    Ok(())
}

fn cmd_keygen(order: usize, alphabet: &str) -> Result<()> {
    let cipher = new_cipher(alphabet)?;
    log::info!("generating a random key of order {}", order);
    let key = cipher
        .generate_key(order)
        .context("key generation failed")?;
    println!("{}", key);
    Ok(())
}
