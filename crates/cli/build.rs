use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("newsprobe")
        .version("0.1.0")
        .author("Newsprobe Contributors")
        .about("Analyze news articles for sentiment, clickbait, and source credibility")
        .arg(clap::arg!(<INPUT> "URL to fetch, local HTML file, or '-' for stdin"))
        .arg(clap::arg!(--url <URL> "Source URL for the credibility check when INPUT is a file or stdin").value_name("URL"))
        .arg(clap::arg!(--json "Print the raw JSON report instead of the human-readable summary"))
        .arg(
            clap::arg!(--config <FILE> "Analyzer configuration file (JSON)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(-v --verbose "Enable verbose progress output"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "newsprobe", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "newsprobe", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "newsprobe", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "newsprobe", &completions_dir).unwrap();
}
