//! Application runner - window mode and headless mode.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui;
use log::{debug, info};

use crate::app::SigilApp;
use crate::cli::Args;
use crate::config::Settings;
use crate::core::{export, Compositor, FontCache, FontChoices, FontSource, Strategies, SystemFonts, TextFunction};

/// Run the program as described by `args`.
pub fn run(args: Args) -> Result<()> {
    let settings = Settings::from_args(&args);
    debug!("Settings: {:?}", settings);

    if args.list_fonts {
        let fonts = SystemFonts::new();
        let stdout = std::io::stdout();
        return list_fonts(&fonts, &mut stdout.lock());
    }

    if let Some(output) = &args.output {
        let fonts = SystemFonts::new();
        return render_to_file(&args, &settings, fonts, output);
    }

    run_window(args, settings)
}

/// Print every usable family, one per line.
pub fn list_fonts(source: &dyn FontSource, out: &mut dyn Write) -> Result<()> {
    for name in source.families() {
        writeln!(out, "{}", name).context("Failed to write font list")?;
    }
    Ok(())
}

/// One compositing pass from CLI arguments, written straight to `output`.
pub fn render_to_file<S: FontSource>(args: &Args, settings: &Settings, source: S, output: &Path) -> Result<()> {
    let mut fonts = FontChoices::new(source.families());
    if let Some(name) = &args.font {
        fonts = fonts.with_selected(name);
    }

    let mut strategies = Strategies {
        font: args.font_fn.build(settings.seed),
        rotation: args.rotation_fn.build(settings.seed),
        spread: args.spread_fn.build(settings.seed),
    };

    let cache = FontCache::new(settings.font_cache_capacity);
    let mut compositor = match settings.seed {
        Some(seed) => Compositor::with_seed(source, cache, settings.canvas, seed),
        None => Compositor::new(source, cache, settings.canvas),
    };

    let raw: Vec<char> = args.text.as_deref().unwrap_or_default().chars().collect();
    let chars = args.text_fn.build().process(&raw);

    let sigil = compositor
        .compose(&chars, strategies.input(&fonts, settings.base_spread))
        .context("Generate failed")?;
    export::write_svg(output, &sigil).context("Save failed")?;

    info!("Headless render complete: {}", output.display());
    Ok(())
}

fn run_window(args: Args, settings: Settings) -> Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sigiltron")
            .with_inner_size([1000.0, 560.0])
            .with_resizable(true),
        ..Default::default()
    };

    info!("Starting Sigiltron window");

    eframe::run_native(
        "Sigiltron",
        native_options,
        Box::new(move |_cc| {
            let mut app = SigilApp::new(SystemFonts::new(), &settings);
            if let Some(text) = args.text {
                app.text = text;
            }
            if let Some(name) = &args.font {
                app.fonts = std::mem::take(&mut app.fonts).with_selected(name);
            }
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start window: {}", e))?;

    info!("Application exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StaticFonts;
    use clap::Parser;

    #[test]
    fn test_list_fonts() {
        let mut out = Vec::new();
        list_fonts(&StaticFonts::new(["Serif", "O'Brien", "Mono"]), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Mono\nSerif\n");
    }

    #[test]
    fn test_render_to_file_dedup_selected_exact() {
        let path = std::env::temp_dir().join(format!("sigiltron_headless_{}.svg", std::process::id()));
        let args = Args::parse_from([
            "sigiltron", "-t", "AAB", "-o", "unused.svg", "--text-fn", "dedup", "--font-fn",
            "selected", "-f", "Serif", "--spread-fn", "exact", "--seed", "8",
        ]);
        let settings = Settings::from_args(&args);

        render_to_file(&args, &settings, StaticFonts::new(["Serif", "Sans"]), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(written.matches("<text").count(), 2);
        assert_eq!(written.matches("font-family=\"Serif\"").count(), 2);
        assert_eq!(written.matches("y=\"250\"").count(), 2);
    }

    #[test]
    fn test_render_to_file_unknown_font_writes_nothing() {
        let path = std::env::temp_dir().join(format!("sigiltron_headless_err_{}.svg", std::process::id()));
        let args = Args::parse_from(["sigiltron", "-t", "x", "--font-fn", "selected", "-f", "Nope"]);
        let settings = Settings::from_args(&args);

        let err = render_to_file(&args, &settings, StaticFonts::new(["Serif"]), &path).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown font family 'Nope'"));
        assert!(!path.exists());
    }
}
