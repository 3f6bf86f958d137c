//! Explizite Editor-Session: Diagramm, Auswahl, Raster und Modus-Automat einer Bearbeitung.

use glam::Vec2;

use super::mode::{
    AddBreakpointState, ArmState, CreateState, EditorMode, EditorNotification, ModeKind,
    MoveGroupState, NeutralState, NeutralType, RemoveBreakpointState,
};
use super::use_cases;
use super::{CommandLog, Selection};
use crate::core::{Diagram, ElementId, ElementTemplate, GridSettings, ObjectRef};
use crate::scene::{PickHit, PickQuery, SceneBackend};
use crate::shared::EditorOptions;

/// Zustand einer geöffneten Bearbeitung.
///
/// Wird mit [`EditorSession::open`] erzeugt und mit [`EditorSession::close`]
/// aufgelöst. Der Controller ist zustandslos und bekommt die Session pro
/// Intent übergeben.
pub struct EditorSession {
    /// Bearbeitetes Diagramm
    pub diagram: Diagram,
    /// Aktuelle Auswahl
    pub selection: Selection,
    /// Raster- und Snap-Einstellungen
    pub grid: GridSettings,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    mode: EditorMode,
    read_only: bool,
    interactive: bool,
    cancelling: bool,
    last_pick: Option<PickHit>,
    last_pointer: Option<Vec2>,
    create_template: ElementTemplate,
    notifications: Vec<EditorNotification>,
}

impl EditorSession {
    /// Öffnet eine Session auf einem Diagramm.
    pub fn open(diagram: Diagram, options: EditorOptions) -> Self {
        log::info!(
            "Editor-Session geöffnet: {} Elemente, {} Linien",
            diagram.element_count(),
            diagram.line_count()
        );
        Self {
            diagram,
            selection: Selection::new(),
            grid: GridSettings::from_options(&options),
            create_template: options.default_element.clone(),
            options,
            command_log: CommandLog::new(),
            mode: EditorMode::default(),
            read_only: false,
            interactive: true,
            cancelling: false,
            last_pick: None,
            last_pointer: None,
            notifications: Vec::new(),
        }
    }

    /// Schließt die Session und gibt das Diagramm an den Host zurück.
    pub fn close(self) -> Diagram {
        log::info!(
            "Editor-Session geschlossen ({} Commands im Log)",
            self.command_log.len()
        );
        self.diagram
    }

    // ── Abfragen ────────────────────────────────────────────────────

    /// Aktiver Modus samt Unterzustand
    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    /// Neutral-Unterzustand, `None` außerhalb von `Neutral`.
    pub fn neutral_type(&self) -> Option<NeutralType> {
        self.mode.neutral().map(NeutralState::kind)
    }

    /// Hinweistext zum aktuellen Modus-Schritt.
    pub fn hint(&self) -> &'static str {
        self.mode.hint()
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// `true`, solange ein `cancel()` läuft.
    pub fn is_cancelling(&self) -> bool {
        self.cancelling
    }

    /// Zuletzt gemerkter Pick-Treffer
    pub fn last_pick(&self) -> Option<PickHit> {
        self.last_pick
    }

    /// Letzte Zeigerposition in Diagramm-Koordinaten (ohne Snap)
    pub fn last_pointer(&self) -> Option<Vec2> {
        self.last_pointer
    }

    /// Vorlage für neue Elemente im Create-Modus
    pub fn create_template(&self) -> &ElementTemplate {
        &self.create_template
    }

    /// Entnimmt alle seit dem letzten Aufruf angefallenen Meldungen.
    pub fn take_notifications(&mut self) -> Vec<EditorNotification> {
        std::mem::take(&mut self.notifications)
    }

    // ── Einstellungen ───────────────────────────────────────────────

    /// Setzt die Vorlage für den nächsten Create-Modus.
    pub fn set_create_template(&mut self, template: ElementTemplate) {
        log::info!("Create-Vorlage: {}", template.kind);
        self.create_template = template;
    }

    /// Setzt den Schreibschutz. Beim Aktivieren wird eine laufende Geste abgebrochen.
    pub fn set_read_only(&mut self, scene: &mut dyn SceneBackend, read_only: bool) {
        if read_only && !self.read_only {
            self.cancel(scene);
        }
        self.read_only = read_only;
        log::info!("Schreibschutz: {}", read_only);
    }

    /// Setzt den interaktiven Bearbeitungszustand (Voraussetzung für `confirm`).
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
        log::debug!("Interaktiv: {}", interactive);
    }

    // ── Zeiger & Picking ────────────────────────────────────────────

    /// Projiziert eine Zeigerposition ins Diagramm, optional ohne Snap.
    pub fn to_model_space(
        &self,
        scene: &dyn SceneBackend,
        screen: Vec2,
        ignore_snap: bool,
    ) -> Vec2 {
        let raw = scene.screen_to_model(screen);
        if ignore_snap {
            raw
        } else {
            self.grid.snap_to_nearest_point(raw)
        }
    }

    /// Merkt sich die Zeigerposition (ohne Snap) für spätere Schritte.
    pub(crate) fn track_pointer(&mut self, scene: &dyn SceneBackend, screen: Vec2) -> Vec2 {
        let point = self.to_model_space(scene, screen, true);
        self.last_pointer = Some(point);
        point
    }

    /// Pickt über die Szene und merkt sich den Treffer.
    pub fn pick(
        &mut self,
        scene: &mut dyn SceneBackend,
        screen: Vec2,
        query: PickQuery,
    ) -> Option<PickHit> {
        let hit = scene.pick(&self.diagram, screen, query, &self.selection);
        self.last_pick = hit;
        hit
    }

    /// Verwirft den gemerkten Pick-Treffer.
    pub fn forget_pick(&mut self) {
        self.last_pick = None;
    }

    pub(crate) fn mode_mut(&mut self) -> &mut EditorMode {
        &mut self.mode
    }

    // ── Modus-Automat ───────────────────────────────────────────────

    /// Wechselt den Modus über Neutral/Exam.
    ///
    /// Der Exit-Hook des alten Modus läuft immer; beim Betreten eines
    /// Nicht-Neutral-Modus werden Auswahl und gemerkter Pick geleert.
    pub fn set_mode(&mut self, scene: &mut dyn SceneBackend, mode: ModeKind) {
        if self.read_only {
            log::debug!("Schreibgeschützt: Moduswechsel nach {:?} ignoriert", mode);
            return;
        }

        let from = self.mode.kind();
        self.leave_mode(scene);

        if mode != ModeKind::Neutral {
            self.selection.clear();
            self.last_pick = None;
        }
        self.mode = self.enter_mode(mode);

        self.notifications
            .push(EditorNotification::ModeChanged { from, to: mode });
        log::info!("Modus: {:?} -> {:?}", from, mode);
    }

    /// Wechselt den Neutral-Unterzustand. Außerhalb von `Neutral` wirkungslos.
    pub fn set_neutral_type(&mut self, scene: &mut dyn SceneBackend, next: NeutralState) {
        let EditorMode::Neutral(current) = self.mode else {
            log::debug!(
                "Neutral-Unterzustand {:?} außerhalb von Neutral ignoriert",
                next.kind()
            );
            return;
        };

        self.leave_neutral_state(scene, current);
        self.mode = EditorMode::Neutral(next);

        if current.kind() != next.kind() {
            self.notifications.push(EditorNotification::NeutralTypeChanged {
                from: current.kind(),
                to: next.kind(),
            });
            log::debug!("Neutral: {:?} -> {:?}", current.kind(), next.kind());
        }
    }

    /// Bestätigt den aktuellen Modus-Schritt.
    pub fn confirm(&mut self, scene: &mut dyn SceneBackend) {
        if !self.interactive || self.read_only {
            log::debug!("Bestätigung ignoriert (nicht interaktiv oder schreibgeschützt)");
            return;
        }

        match self.mode.clone() {
            EditorMode::Neutral(_) => {}
            EditorMode::Rotate(ArmState::Armed(ObjectRef::Element(id))) => {
                if let Err(e) = use_cases::editing::rotate_element(self, scene, id) {
                    log::warn!("Drehen fehlgeschlagen: {}", e);
                }
                self.mode = EditorMode::Rotate(ArmState::Idle);
            }
            EditorMode::Delete(ArmState::Armed(object)) => {
                if let Err(e) = use_cases::editing::erase_object(self, scene, object) {
                    log::warn!("Löschen fehlgeschlagen: {}", e);
                }
                self.last_pick = None;
                self.mode = EditorMode::Delete(ArmState::Idle);
            }
            EditorMode::Rotate(_) | EditorMode::Delete(_) => self.cancel(scene),
            EditorMode::Create(CreateState::Hidden(_))
            | EditorMode::AddBreakpoint(AddBreakpointState::Idle) => self.cancel(scene),
            // Bestätigt wird hier über Klick bzw. Loslassen
            EditorMode::Create(_) | EditorMode::AddBreakpoint(_) => {}
            EditorMode::RemoveBreakpoint(state) => match state {
                RemoveBreakpointState::Idle => self.cancel(scene),
                RemoveBreakpointState::Candidate { line, index } => {
                    let removed = use_cases::editing::remove_breakpoint(self, scene, line, index);
                    if let Err(e) = removed {
                        log::warn!("Knickpunkt entfernen fehlgeschlagen: {}", e);
                    }
                    self.selection.clear();
                    self.mode = EditorMode::RemoveBreakpoint(RemoveBreakpointState::Idle);
                }
                RemoveBreakpointState::NotRemovable | RemoveBreakpointState::Invalid => {
                    self.mode = EditorMode::RemoveBreakpoint(RemoveBreakpointState::Idle);
                }
            },
            EditorMode::MoveGroup(state) => match state {
                MoveGroupState::Idle => {
                    self.mode = EditorMode::MoveGroup(MoveGroupState::Ready);
                }
                MoveGroupState::Ready => {
                    let anchor = self.last_pointer.unwrap_or(Vec2::ZERO);
                    let offsets = self.group_offsets(anchor);
                    self.mode = EditorMode::MoveGroup(MoveGroupState::Dragging { offsets });
                }
                MoveGroupState::Dragging { .. } => self.cancel(scene),
            },
        }
    }

    /// Kehrt nach Neutral/Exam zurück und leert Auswahl und gemerkten Pick.
    ///
    /// Ein ausstehendes Create-Element wird dabei immer verworfen.
    pub fn cancel(&mut self, scene: &mut dyn SceneBackend) {
        if self.read_only {
            return;
        }
        if self.cancelling {
            log::debug!("Cancel während Cancel ignoriert");
            return;
        }
        self.cancelling = true;

        let from = self.mode.kind();
        let from_neutral = self.neutral_type();
        self.leave_mode(scene);
        self.selection.clear();
        self.last_pick = None;

        if from != ModeKind::Neutral {
            self.notifications.push(EditorNotification::ModeChanged {
                from,
                to: ModeKind::Neutral,
            });
            log::info!("Abbruch: {:?} -> Neutral", from);
        } else if let Some(neutral) = from_neutral.filter(|t| *t != NeutralType::Exam) {
            self.notifications.push(EditorNotification::NeutralTypeChanged {
                from: neutral,
                to: NeutralType::Exam,
            });
        }

        self.cancelling = false;
    }

    /// Versatz aller selektierten Elemente zu `anchor`.
    pub(crate) fn group_offsets(&self, anchor: Vec2) -> Vec<(ElementId, Vec2)> {
        self.selection
            .elements()
            .filter_map(|id| {
                let element = self.diagram.element(id)?;
                Some((id, element.position - anchor))
            })
            .collect()
    }

    /// Exit-Hook des aktuellen Modus; hinterlässt Neutral/Exam.
    fn leave_mode(&mut self, scene: &mut dyn SceneBackend) {
        match std::mem::take(&mut self.mode) {
            EditorMode::Neutral(state) => self.leave_neutral_state(scene, state),
            EditorMode::Create(state) => {
                let never_shown = matches!(state, CreateState::Hidden(_));
                if never_shown || self.cancelling {
                    let object = ObjectRef::Element(state.element());
                    if let Err(e) = use_cases::editing::erase_object(self, scene, object) {
                        log::warn!("Ausstehendes Element nicht entfernt: {}", e);
                    }
                }
            }
            EditorMode::AddBreakpoint(AddBreakpointState::Placing { line, index }) => {
                if let Err(e) = use_cases::editing::remove_breakpoint(self, scene, line, index) {
                    log::warn!("Provisorischer Knickpunkt nicht entfernt: {}", e);
                }
            }
            _ => {}
        }
    }

    fn leave_neutral_state(&mut self, scene: &mut dyn SceneBackend, state: NeutralState) {
        if let NeutralState::Draw { .. } = state {
            scene.clear_feedback_line();
        }
    }

    /// Entry-Hook: liefert den Leerlauf-Zustand des neuen Modus.
    fn enter_mode(&mut self, mode: ModeKind) -> EditorMode {
        match mode {
            ModeKind::Neutral => EditorMode::Neutral(NeutralState::Exam),
            ModeKind::Create => {
                let position = self
                    .last_pointer
                    .map(|p| self.grid.snap_to_nearest_point(p))
                    .unwrap_or(Vec2::ZERO);
                let id = self.diagram.add_element(
                    &self.create_template,
                    position,
                    self.options.element_size(),
                );
                log::debug!("Ausstehendes Element {:?} ({})", id, self.create_template.kind);
                EditorMode::Create(CreateState::Hidden(id))
            }
            ModeKind::Delete => EditorMode::Delete(ArmState::Idle),
            ModeKind::Rotate => EditorMode::Rotate(ArmState::Idle),
            ModeKind::AddBreakpoint => EditorMode::AddBreakpoint(AddBreakpointState::Idle),
            ModeKind::RemoveBreakpoint => {
                EditorMode::RemoveBreakpoint(RemoveBreakpointState::Idle)
            }
            ModeKind::MoveGroup => EditorMode::MoveGroup(MoveGroupState::Idle),
        }
    }
}
