//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::process::exit;

use huffman::tools::cli::{help, huffopts_init, HuffOpts};
use huffman::{build_tree, decode, encode, print_tree, HuffError};

use log::{error, info, warn, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace. The -v flags pick the real ceiling.
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("[Huffman]: Could not start the logger, continuing without it.");
    }

    let opts = huffopts_init();

    if let Some(topic) = &opts.help {
        help(topic);
    }

    // Help is printed first, but a run without text is still a usage error
    let Some(text) = opts.text.as_deref() else {
        println!("[Huffman]: Missing string input for the algorithm!");
        exit(1);
    };

    if let Err(e) = run(&opts, text.as_bytes()) {
        error!("{}", e);
        println!("[Huffman]: {}", e);
        exit(1);
    }
    info!("Done.");
}

/// Build the tree for the text, show whatever was asked for, then print the tree.
fn run(opts: &HuffOpts, text: &[u8]) -> Result<(), HuffError> {
    let tree = build_tree(text)?;

    if opts.show_encoded || opts.show_decoded {
        match encode(&tree, text) {
            Ok(encoded) => {
                if opts.show_encoded {
                    println!("Encoded: \"{}\"", encoded);
                }
                if opts.show_decoded {
                    let decoded = decode(&tree, &encoded)?;
                    println!("Decoded: \"{}\"", String::from_utf8_lossy(&decoded));
                }
            }
            // A one byte text still has a tree worth printing
            Err(e @ HuffError::NotEncodable { .. }) => {
                warn!("{}", e);
                println!("[Huffman]: {}", e);
            }
            Err(e) => return Err(e),
        }
    }

    print_tree(&tree)
}
