//! Command session — newline-delimited JSON in, one JSON reply per line out.
//!
//! DESIGN
//! ======
//! Each input line is a tagged `Command` that maps onto one engine input
//! event or remote call. The reply carries the actions the command produced
//! and the remote status, so a host can re-render from replies alone. A bad
//! line yields an error reply; the session keeps going.
//!
//! `save` and `load` answer at once with `saving`/`loading`. When the call
//! finishes, an extra reply tagged `completed` carries the settled status
//! and any actions the load produced. Commands sent meanwhile are answered
//! as usual.

use board::consts::{NOTE_PALETTE, PRESET_COLORS};
use board::doc::{Note, NoteEdit, NoteId};
use board::engine::{Action, BoardEngine};
use board::geom::{Point, Rect};
use board::size::SizeField;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::services::remote::RemoteStatus;
use crate::state::{AppState, RemoteOutcome};

/// Stable machine-readable code for an error reply.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid command: {0}")]
    BadCommand(#[from] serde_json::Error),
    #[error("note not found: {0}")]
    NoteNotFound(NoteId),
}

impl ErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::BadCommand(_) => "E_BAD_COMMAND",
            Self::NoteNotFound(_) => "E_NOTE_NOT_FOUND",
        }
    }
}

fn single_click() -> u32 {
    1
}

/// One input line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Viewport { x: f64, y: f64, width: f64, height: f64 },
    Trash { rect: Rect },
    SelectColor { color: String },
    SizeDraft { field: SizeField, text: String },
    CommitSize { field: SizeField },
    CreateCentered,
    CreateAt { x: f64, y: f64 },
    DoubleClick { x: f64, y: f64 },
    HeaderDown {
        id: NoteId,
        x: f64,
        y: f64,
        #[serde(default = "single_click")]
        clicks: u32,
    },
    ResizerDown { id: NoteId, x: f64, y: f64 },
    BodyClick { id: NoteId },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    PointerCancel,
    Edit { id: NoteId, edit: NoteEdit },
    ClearAll,
    Save,
    Load,
    Notes,
    Palette,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyError {
    pub code: &'static str,
    pub message: String,
}

/// A note as rendered: the stored record plus derived display fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteView {
    #[serde(flatten)]
    pub note: Note,
    pub display_title: String,
    pub over_trash: bool,
}

impl NoteView {
    fn from_engine(engine: &BoardEngine, note: &Note) -> Self {
        Self { note: note.clone(), display_title: note.display_title(), over_trash: engine.is_over_trash(note.id) }
    }
}

/// Swatches offered by the toolbar and by each note's color picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub presets: &'static [&'static str],
    pub note: &'static [&'static str],
}

/// One output line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub ok: bool,
    pub status: RemoteStatus,
    pub actions: Vec<Action>,
    /// Set on the unsolicited reply sent when a `save` or `load` finishes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<NoteView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<Palette>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ReplyError>,
}

impl Reply {
    fn ok(status: RemoteStatus, actions: Vec<Action>) -> Self {
        Self { ok: true, status, actions, completed: None, notes: None, palette: None, size: None, error: None }
    }

    fn error(status: RemoteStatus, err: &SessionError) -> Self {
        Self {
            ok: false,
            error: Some(ReplyError { code: err.error_code(), message: err.to_string() }),
            ..Self::ok(status, Vec::new())
        }
    }
}

/// Run one command against the state.
///
/// # Errors
///
/// Returns `NoteNotFound` when an edit targets a missing note.
pub fn dispatch(state: &mut AppState, command: Command) -> Result<Reply, SessionError> {
    let engine = &mut state.engine;
    let actions = match command {
        Command::Viewport { x, y, width, height } => {
            engine.set_viewport(Point::new(x, y), width, height);
            Vec::new()
        }
        Command::Trash { rect } => {
            engine.set_trash_rect(rect);
            Vec::new()
        }
        Command::SelectColor { color } => {
            engine.select_color(&color);
            Vec::new()
        }
        Command::SizeDraft { field, text } => {
            engine.set_size_draft(field, &text);
            Vec::new()
        }
        Command::CommitSize { field } => {
            let size = engine.commit_size(field);
            let mut reply = Reply::ok(state.status, Vec::new());
            reply.size = Some(size);
            return Ok(reply);
        }
        Command::CreateCentered => vec![engine.create_centered()],
        Command::CreateAt { x, y } => vec![engine.create_note_at(Point::new(x, y))],
        Command::DoubleClick { x, y } => vec![engine.on_board_double_click(Point::new(x, y))],
        Command::HeaderDown { id, x, y, clicks } => engine.on_header_down(id, Point::new(x, y), clicks),
        Command::ResizerDown { id, x, y } => engine.on_resizer_down(id, Point::new(x, y)),
        Command::BodyClick { id } => engine.on_body_click(id),
        Command::PointerMove { x, y } => engine.on_pointer_move(Point::new(x, y)),
        Command::PointerUp { x, y } => engine.on_pointer_up(Point::new(x, y)),
        Command::PointerCancel => {
            engine.on_pointer_cancel();
            Vec::new()
        }
        Command::Edit { id, edit } => vec![engine.edit(id, edit).ok_or(SessionError::NoteNotFound(id))?],
        Command::ClearAll => vec![engine.clear_all()],
        Command::Save => return Ok(Reply::ok(state.start_save(), Vec::new())),
        Command::Load => return Ok(Reply::ok(state.start_load(), Vec::new())),
        Command::Notes => {
            let engine = &state.engine;
            let views = engine.doc.sorted_notes().into_iter().map(|n| NoteView::from_engine(engine, n)).collect();
            let mut reply = Reply::ok(state.status, Vec::new());
            reply.notes = Some(views);
            return Ok(reply);
        }
        Command::Palette => {
            let mut reply = Reply::ok(state.status, Vec::new());
            reply.palette = Some(Palette { presets: &PRESET_COLORS, note: &NOTE_PALETTE });
            return Ok(reply);
        }
    };
    let actions = state.commit(actions);
    Ok(Reply::ok(state.status, actions))
}

/// Parse and run one input line, always producing a reply.
/// Must be called inside a tokio runtime, since `save`/`load` spawn tasks.
pub fn handle_line(state: &mut AppState, line: &str) -> Reply {
    let result = match serde_json::from_str::<Command>(line) {
        Ok(command) => {
            debug!(?command, "dispatching command");
            dispatch(state, command)
        }
        Err(e) => Err(SessionError::from(e)),
    };
    match result {
        Ok(reply) => reply,
        Err(e) => {
            warn!(code = e.error_code(), error = %e, "command rejected");
            Reply::error(state.status, &e)
        }
    }
}

/// Apply a finished remote call and build its completion reply.
pub fn complete(state: &mut AppState, outcome: RemoteOutcome) -> Reply {
    let op = outcome.op();
    let (status, actions) = state.finish_remote(outcome);
    info!(op, ?status, "remote call finished");
    let mut reply = Reply::ok(status, actions);
    reply.completed = Some(op);
    reply
}

async fn write_reply<W: AsyncWrite + Unpin>(output: &mut W, reply: &Reply) -> std::io::Result<()> {
    let mut raw = serde_json::to_string(reply).map_err(std::io::Error::other)?;
    raw.push('\n');
    output.write_all(raw.as_bytes()).await?;
    output.flush().await
}

/// Serve commands from `input`, writing replies to `output`, until input
/// hits EOF and every remote call in flight has reported back.
/// Blank lines are skipped.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub async fn run<R, W>(
    state: &mut AppState,
    mut outcomes: mpsc::UnboundedReceiver<RemoteOutcome>,
    input: R,
    mut output: W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut input_open = true;
    loop {
        if !input_open && state.in_flight == 0 {
            break;
        }
        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    input_open = false;
                    continue;
                };
                if line.trim().is_empty() {
                    continue;
                }
                let reply = handle_line(state, &line);
                write_reply(&mut output, &reply).await?;
            }
            Some(outcome) = outcomes.recv() => {
                let reply = complete(state, outcome);
                write_reply(&mut output, &reply).await?;
            }
            else => break,
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
