use clap::Parser;
use log::{debug, info};
use std::{fmt::Display, fmt::Formatter};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    fn from_count(count: u64) -> Self {
        match count {
            0 => Verbosity::Errors,
            1 => Verbosity::Warnings,
            2 => Verbosity::Info,
            3 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        match self {
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Which help message was asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpTopic {
    /// List every flag
    All,
    Encode,
    Decode,
    /// A topic we have nothing to say about
    Unknown(String),
}

impl Display for HelpTopic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HelpTopic::Unknown(topic) => write!(f, "{}", topic),
            other => write!(f, "{:?}", other),
        }
    }
}

impl From<Option<String>> for HelpTopic {
    fn from(topic: Option<String>) -> Self {
        match topic.as_deref() {
            None => HelpTopic::All,
            Some("encode") | Some("e") => HelpTopic::Encode,
            Some("decode") | Some("d") => HelpTopic::Decode,
            Some(other) => HelpTopic::Unknown(other.to_string()),
        }
    }
}

/// Command Line Interpretation - uses external CLAP crate.
/// The built in help flag is replaced by our own, which takes an optional topic.
#[derive(Parser, Debug)]
#[clap(
    name = "huffman",
    version,
    about = "Huffman encode and decode a short ASCII text",
    disable_help_flag = true
)]
pub struct Args {
    /// Text to process
    #[clap()]
    text: Option<String>,

    /// Display the encoded string
    #[clap(short = 'e', long = "encode")]
    encode: bool,

    /// Display the decoded string
    #[clap(short = 'd', long = "decode")]
    decode: bool,

    /// List the flags, or describe one of them (encode, decode)
    #[clap(short = 'h', long = "help", value_name = "TOPIC")]
    help: Option<Option<String>>,

    /// Sets verbosity. -v shows warnings, -vvvv is chatty
    #[clap(short = 'v', long = "verbose", parse(from_occurrences))]
    verbose: u64,
}

/// All user settable options that control program behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffOpts {
    /// Text to encode, decode and print the tree of
    pub text: Option<String>,
    /// Print the encoded form of the text
    pub show_encoded: bool,
    /// Print the text recovered from the encoded form
    pub show_decoded: bool,
    /// Help message requested, if any
    pub help: Option<HelpTopic>,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            text: None,
            show_encoded: false,
            show_decoded: false,
            help: None,
            verbose: Verbosity::Errors,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        Self {
            text: args.text,
            show_encoded: args.encode,
            show_decoded: args.decode,
            help: args.help.map(HelpTopic::from),
            verbose: Verbosity::from_count(args.verbose),
        }
    }
}

/// Read the command line, set the log level and return the run options.
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::from(Args::parse());

    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    // Below we report initialization status to the user
    info!("Verbosity set to {}", log::max_level());
    match &opts.text {
        Some(text) => debug!("Text input is {} bytes", text.len()),
        None => debug!("No text input"),
    }
    if let Some(topic) = &opts.help {
        debug!("Help requested on {}", topic);
    }
    opts
}

/// Help message for a topic. Unknown topics have no message.
pub fn help_text(topic: &HelpTopic) -> Option<String> {
    match topic {
        HelpTopic::All => Some(
            "[Huffman]: The following flags are supported:\n\
             [Huffman]: --encode (-e)\n\
             [Huffman]: --decode (-d)"
                .to_string(),
        ),
        HelpTopic::Encode => Some(
            "[Huffman]: --encode (-e): Enables to display the encoded string.".to_string(),
        ),
        HelpTopic::Decode => Some(
            "[Huffman]: --decode (-d): Enables to display the decoded string.".to_string(),
        ),
        HelpTopic::Unknown(_) => None,
    }
}

/// Prints help information
pub fn help(topic: &HelpTopic) {
    match help_text(topic) {
        Some(text) => println!("{}", text),
        None => log::warn!("No help available for '{}'", topic),
    }
}
