use crate::status::StatusStyle;
use colored::Colorize;

/// Version info from build.rs
pub const VERSION: &str = env!("CHROT13_VERSION");
pub const PROFILE: &str = env!("CHROT13_PROFILE");
pub const GIT_HASH: &str = env!("CHROT13_GIT_HASH");

pub const PROJECT: &str = "ChRot13";
pub const AUTHOR: &str = "Ch4120N";

const ART: &[&str] = &[
    r"   ____ _     ____       _   _ _____ ",
    r"  / ___| |__ |  _ \ ___ | |_/ |___ / ",
    r" | |   | '_ \| |_) / _ \| __| | |_ \ ",
    r" | |___| | | |  _ < (_) | |_| |___) |",
    r"  \____|_| |_|_| \_\___/ \__|_|____/ ",
];

/// One-line version/author identifier
pub fn version_line() -> String {
    format!(
        "{} v{} by {} ({} build, git {})",
        PROJECT, VERSION, AUTHOR, PROFILE, GIT_HASH
    )
}

/// Full banner text, colored when the style allows it
pub fn render_banner(style: StatusStyle) -> String {
    let title = format!("{} - ROT13 Encoder/Decoder", PROJECT);

    let mut output = String::new();
    for line in ART {
        if style.color {
            output.push_str(&format!("{}\n", line.bright_magenta().bold()));
        } else {
            output.push_str(&format!("{}\n", line));
        }
    }
    output.push('\n');
    if style.color {
        output.push_str(&format!("  {}\n", title.bold()));
    } else {
        output.push_str(&format!("  {}\n", title));
    }
    output.push_str(&format!("  Version {} | Author {}\n", VERSION, AUTHOR));
    output
}
