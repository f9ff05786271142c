// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document lifecycle session.
//
// State machine: Idle -> Synthesizing -> Ready -> Exporting -> Ready. The
// current document (record + credential + scene) is owned by the session and
// replaced wholesale on every generate; nothing is mutated in place, so no
// partially-updated state is ever observable. A generate issued while an
// export is in flight supersedes it: the export still resolves, but its
// result is discarded.

use mockid_barcode::BarcodeSymbol;
use mockid_core::AppConfig;
use mockid_core::error::{MockidError, Result};
use mockid_core::types::{
    DocumentKind, JurisdictionCode, PersonRecord, Photo, SyntheticCredential,
};
use mockid_render::{ExportArtifact, RenderedScene, TemplateRegistry, compose, export_png};
use rand::Rng;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::input::CardInput;

/// Lifecycle states of the preview document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No document yet, or the last input failed validation.
    Idle,
    /// A generate action is running.
    Synthesizing,
    /// A credential and scene are available.
    Ready,
    /// An export task is in flight.
    Exporting,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Idle => "Idle",
            Self::Synthesizing => "Synthesizing",
            Self::Ready => "Ready",
            Self::Exporting => "Exporting",
        };
        f.write_str(name)
    }
}

/// The document produced by one generate cycle. Replaced wholesale by the
/// next cycle; the generation id tags which cycle produced it.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub generation: Uuid,
    pub code: JurisdictionCode,
    pub kind: DocumentKind,
    pub record: PersonRecord,
    pub credential: SyntheticCredential,
    pub scene: RenderedScene,
}

/// Outcome of a finished export.
#[derive(Debug)]
pub enum ExportOutcome {
    Completed(ExportArtifact),
    /// A newer generate replaced the document while the export ran; the
    /// resolved bytes were discarded.
    Superseded,
}

/// A rasterization task in flight, tagged with the generation it renders.
pub struct PendingExport {
    generation: Uuid,
    handle: JoinHandle<Result<ExportArtifact>>,
}

/// Owns the current document and drives the lifecycle state machine.
pub struct DocumentSession {
    config: AppConfig,
    state: SessionState,
    document: Option<GeneratedDocument>,
}

impl DocumentSession {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            state: SessionState::Idle,
            document: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn document(&self) -> Option<&GeneratedDocument> {
        self.document.as_ref()
    }

    /// Run one generate cycle: build the record, synthesize a credential,
    /// encode the barcode, and compose the scene. Replaces any previous
    /// document atomically (last write wins) and implicitly supersedes any
    /// export still in flight.
    ///
    /// A validation failure leaves the session exactly as it was.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        input: &CardInput,
        photo: Option<Photo>,
        rng: &mut R,
    ) -> Result<&GeneratedDocument> {
        let code = input.jurisdiction()?;
        let record = input.into_record(photo)?;

        self.state = SessionState::Synthesizing;

        let credential = mockid_synth::synthesize(&code, rng);
        let scene = self.compose_scene(&code, &record, &credential);

        let document = GeneratedDocument {
            generation: Uuid::new_v4(),
            code,
            kind: input.document_type,
            record,
            credential,
            scene,
        };
        info!(generation = %document.generation, code = %document.code, "document generated");

        self.state = SessionState::Ready;
        Ok(self.document.insert(document))
    }

    /// Recompose the current scene with a freshly decoded photo, keeping the
    /// credential. Bumps the generation so an export of the photo-less scene
    /// resolves as superseded.
    pub fn apply_photo(&mut self, photo: Photo) -> Result<&GeneratedDocument> {
        let Some(doc) = self.document.as_mut() else {
            return Err(MockidError::InvalidState {
                state: SessionState::Idle.to_string(),
                action: "apply photo".into(),
            });
        };

        let mut record = doc.record.clone();
        record.photo = Some(photo);
        let scene = compose_with(
            &self.config,
            &doc.code,
            &record,
            &doc.credential,
        );

        doc.record = record;
        doc.scene = scene;
        doc.generation = Uuid::new_v4();
        debug!(generation = %doc.generation, "photo applied, scene recomposed");
        Ok(doc)
    }

    /// Start exporting the current scene. Ready -> Exporting; the returned
    /// ticket resolves via `finish_export`. Rasterization runs on the
    /// blocking pool so the event loop is never stalled.
    pub fn begin_export(&mut self, scale: f32) -> Result<PendingExport> {
        if self.state != SessionState::Ready {
            return Err(MockidError::InvalidState {
                state: self.state.to_string(),
                action: "export".into(),
            });
        }
        let Some(doc) = self.document.as_ref() else {
            return Err(MockidError::InvalidState {
                state: self.state.to_string(),
                action: "export".into(),
            });
        };
        let generation = doc.generation;
        let scene = doc.scene.clone();

        self.state = SessionState::Exporting;
        debug!(%generation, scale, "export started");

        let handle = tokio::task::spawn_blocking(move || export_png(&scene, scale));
        Ok(PendingExport { generation, handle })
    }

    /// Resolve a pending export. Always returns the session to Ready (the
    /// document is retained so a failed export can be retried). Stale
    /// results from a superseded generation are discarded, never surfaced
    /// as an artifact.
    pub async fn finish_export(&mut self, pending: PendingExport) -> Result<ExportOutcome> {
        let joined = pending
            .handle
            .await
            .map_err(|err| MockidError::ExportTask(err.to_string()));

        if self.state == SessionState::Exporting {
            self.state = SessionState::Ready;
        }

        let artifact = joined??;

        let current = self.document.as_ref().map(|d| d.generation);
        if current != Some(pending.generation) {
            warn!(stale = %pending.generation, "discarding superseded export result");
            return Ok(ExportOutcome::Superseded);
        }
        Ok(ExportOutcome::Completed(artifact))
    }

    /// Begin and await a full export in one step at the configured export
    /// scale (the sequential CLI path).
    pub async fn export(&mut self) -> Result<ExportArtifact> {
        let pending = self.begin_export(self.config.export_scale)?;
        match self.finish_export(pending).await? {
            ExportOutcome::Completed(artifact) => Ok(artifact),
            ExportOutcome::Superseded => Err(MockidError::ExportTask(
                "export superseded by a newer document".into(),
            )),
        }
    }

    fn compose_scene(
        &self,
        code: &JurisdictionCode,
        record: &PersonRecord,
        credential: &SyntheticCredential,
    ) -> RenderedScene {
        compose_with(&self.config, code, record, credential)
    }
}

fn compose_with(
    config: &AppConfig,
    code: &JurisdictionCode,
    record: &PersonRecord,
    credential: &SyntheticCredential,
) -> RenderedScene {
    // An unencodable document number degrades to an empty symbol: the card
    // renders without its barcode region.
    let barcode = match mockid_barcode::encode(&credential.number) {
        Ok(symbol) => symbol,
        Err(err) => {
            warn!(error = %err, "barcode omitted");
            BarcodeSymbol {
                data: String::new(),
                bars: Vec::new(),
            }
        }
    };
    let template = TemplateRegistry::global().get(code);
    compose(
        &template,
        record,
        credential,
        &barcode,
        record.photo.as_ref(),
        config,
    )
}
