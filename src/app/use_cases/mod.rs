//! Use-Cases der Application-Layer-Orchestrierung.
//!
//! Jeder Use-Case mutiert das Diagramm der Session und meldet die
//! betroffenen Objekte an die Szene.

pub mod editing;
pub mod moving;
