//! Block-Diagram Replay.
//!
//! Spielt ein aufgezeichnetes Gesten-Skript (JSON) gegen eine frische
//! Editor-Session mit fensterloser Szene ab und protokolliert das Ergebnis.
//! Dient zum Nachstellen von Interaktionsfehlern ohne GUI.

use std::path::{Path, PathBuf};

use anyhow::Context;
use block_diagram_editor::{
    Diagram, EditorController, EditorIntent, EditorOptions, EditorSession, ElementTemplate,
    HeadlessScene,
};
use serde::Deserialize;

fn main() -> anyhow::Result<()> {
    ReplayRunner::run()
}

/// Vorab zu platzierendes Element
#[derive(Debug, Deserialize)]
struct SeedElement {
    #[serde(default)]
    template: ElementTemplate,
    position: [f32; 2],
    #[serde(default)]
    mirrored: bool,
}

/// Replay-Skript: entweder nur Intents oder Intents mit vorab platzierten Elementen.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReplayScript {
    Intents(Vec<EditorIntent>),
    Seeded {
        #[serde(default)]
        elements: Vec<SeedElement>,
        intents: Vec<EditorIntent>,
    },
}

impl ReplayScript {
    fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Skript nicht lesbar: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Skript fehlerhaft: {}", path.display()))
    }

    fn into_parts(self) -> (Vec<SeedElement>, Vec<EditorIntent>) {
        match self {
            ReplayScript::Intents(intents) => (Vec::new(), intents),
            ReplayScript::Seeded { elements, intents } => (elements, intents),
        }
    }
}

struct ReplayRunner;

impl ReplayRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Block-Diagram Replay v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let script_path = std::env::args_os()
            .nth(1)
            .map(PathBuf::from)
            .context("Aufruf: block-diagram-replay <skript.json>")?;

        // Optionen aus TOML laden (oder Standardwerte)
        let options = EditorOptions::load_from_file(&EditorOptions::config_path());
        let script = ReplayScript::load(&script_path)?;

        let diagram = Self::replay(script, options)?;
        Self::log_summary(&diagram);
        Ok(())
    }

    /// Spielt alle Intents ab und gibt das resultierende Diagramm zurück.
    fn replay(script: ReplayScript, options: EditorOptions) -> anyhow::Result<Diagram> {
        let (seeds, intents) = script.into_parts();

        let mut diagram = Diagram::new();
        let size = options.element_size();
        for seed in seeds {
            let id = diagram.add_element(&seed.template, seed.position.into(), size);
            if seed.mirrored {
                diagram.rotate_element(id)?;
            }
        }

        let mut scene = HeadlessScene::new(&options);
        let mut session = EditorSession::open(diagram, options);
        let mut controller = EditorController::new();

        for (step, intent) in intents.into_iter().enumerate() {
            log::debug!("Schritt {}: {:?}", step + 1, intent);
            controller
                .handle_intent(&mut session, &mut scene, intent)
                .with_context(|| format!("Schritt {} fehlgeschlagen", step + 1))?;
            for notification in session.take_notifications() {
                log::info!("Schritt {}: {:?}", step + 1, notification);
            }
            log::debug!(
                "Schritt {}: {} geändert, {} entfernt",
                step + 1,
                scene.changed_objects().len(),
                scene.removed_objects().len()
            );
            scene.clear_records();
        }

        log::info!(
            "Replay beendet in {:?}: {}",
            session.mode_kind(),
            session.hint()
        );
        Ok(session.close())
    }

    fn log_summary(diagram: &Diagram) {
        log::info!(
            "Diagramm: {} Elemente, {} Linien",
            diagram.element_count(),
            diagram.line_count()
        );
        for element in diagram.elements() {
            log::info!(
                "  {:?} {} bei {:?} ({:?})",
                element.id,
                element.kind,
                element.position,
                element.orientation
            );
        }
        for line in diagram.lines() {
            log::info!(
                "  {:?}: {:?} -> {:?}, Knickpunkte {:?}",
                line.id,
                line.source,
                line.target,
                line.breakpoints
            );
        }
        if let Err(e) = diagram.check_invariants() {
            log::error!("Invariante verletzt: {}", e);
        }
    }
}
