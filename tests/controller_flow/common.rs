use block_diagram_editor::{
    Diagram, EditorController, EditorIntent, EditorMode, EditorOptions, EditorSession, ElementId,
    ElementTemplate, HeadlessScene, LineId, ModeKind, NeutralState, PortRef,
};
use glam::Vec2;

/// Session, Szene und Controller für Gesten in Diagramm-Koordinaten.
pub struct Harness {
    pub session: EditorSession,
    pub scene: HeadlessScene,
    pub controller: EditorController,
}

impl Harness {
    pub fn new(diagram: Diagram) -> Self {
        let options = EditorOptions::default();
        Self {
            scene: HeadlessScene::new(&options),
            session: EditorSession::open(diagram, options),
            controller: EditorController::new(),
        }
    }

    /// Elemente der Standardvorlage (Größe 1×1) an den gegebenen Mittelpunkten.
    pub fn with_elements(positions: &[Vec2]) -> (Self, Vec<ElementId>) {
        let mut diagram = Diagram::new();
        let template = ElementTemplate::default();
        let ids = positions
            .iter()
            .map(|p| diagram.add_element(&template, *p, Vec2::ONE))
            .collect();
        (Self::new(diagram), ids)
    }

    /// Zwei Elemente bei (0,0) und (4,0), verbunden Ausgang a → Eingang b.
    pub fn connected_pair() -> (Self, ElementId, ElementId, LineId) {
        let (mut harness, ids) =
            Self::with_elements(&[Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0)]);
        let line = harness
            .session
            .diagram
            .create_line(PortRef::output(ids[0], 0), PortRef::input(ids[1], 0))
            .expect("Linie erwartet");
        (harness, ids[0], ids[1], line)
    }

    pub fn send(&mut self, intent: EditorIntent) {
        self.controller
            .handle_intent(&mut self.session, &mut self.scene, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    fn screen(&self, model: Vec2) -> Vec2 {
        self.scene.model_to_screen(model)
    }

    pub fn press(&mut self, model: Vec2) {
        let screen = self.screen(model);
        self.send(EditorIntent::PointerPressed { screen });
    }

    pub fn move_to(&mut self, model: Vec2) {
        let screen = self.screen(model);
        self.send(EditorIntent::PointerMoved { screen });
    }

    pub fn release(&mut self, model: Vec2) {
        let screen = self.screen(model);
        self.send(EditorIntent::PointerReleased { screen });
    }

    pub fn click(&mut self, model: Vec2) {
        self.press(model);
        self.release(model);
    }

    pub fn set_mode(&mut self, mode: ModeKind) {
        self.send(EditorIntent::ModeRequested { mode });
    }

    pub fn confirm(&mut self) {
        self.send(EditorIntent::ConfirmGesture);
    }

    pub fn cancel(&mut self) {
        self.send(EditorIntent::CancelGesture);
    }

    pub fn position_of(&self, id: ElementId) -> Vec2 {
        self.session
            .diagram
            .element(id)
            .map(|e| e.position)
            .expect("Element erwartet")
    }

    /// Zustand nach jedem Abbruch: Neutral/Exam, leere Auswahl, kein gemerkter Pick.
    pub fn assert_reset(&self) {
        assert_eq!(self.session.mode(), &EditorMode::Neutral(NeutralState::Exam));
        assert!(self.session.selection.is_empty());
        assert!(self.session.last_pick().is_none());
    }
}
