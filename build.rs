use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const ENTRY: &str = "assets/css/main.css";
const OUTPUT: &str = "assets/dist/bundle.css";

// Files pulled in by main.css
const PARTIALS: [&str; 3] = ["palette.css", "layout.css", "sidebar.css"];

const MODES: [&str; 2] = ["light", "dark"];

/// Custom properties the theme token tables reference for one mode
fn palette_properties(mode: &str) -> Vec<String> {
    let mut names = Vec::new();
    for state in ["default", "hover", "active"] {
        names.push(format!("--color-sidebar-background-{mode}-{state}"));
        names.push(format!("--color-text-{mode}-{state}"));
    }
    names.push(format!("--color-text-logo-{mode}-default"));
    for state in ["default", "active"] {
        names.push(format!("--color-button-background-{mode}-{state}"));
    }
    names
}

fn main() {
    println!("cargo:rerun-if-changed={ENTRY}");
    for partial in PARTIALS {
        println!("cargo:rerun-if-changed=assets/css/{partial}");
    }

    fs::create_dir_all("assets/dist").expect("Failed to create assets/dist directory");

    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY))
        .expect("Failed to bundle CSS");

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to generate CSS output");

    // The default palette must define every color the sidebar themes point at
    for mode in MODES {
        for property in palette_properties(mode) {
            if !css.code.contains(&format!("{property}:")) {
                println!("cargo:warning=default palette is missing {property}");
            }
        }
    }

    fs::write(OUTPUT, css.code).expect("Failed to write bundle.css");
}
