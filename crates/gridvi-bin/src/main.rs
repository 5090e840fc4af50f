//! gridvi entrypoint: CLI parsing, startup logging, and the single-threaded
//! main loop from spec.md §5.

use std::path::{Path, PathBuf};
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use clap::Parser;
use thiserror::Error;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

use core_actions::{dispatch, translate};
use core_model::{Point, Rect};
use core_state::Editor;
use core_terminal::{CrosstermBackend, RawReader, Renderer, Style, TerminalBackend, query_size};

#[derive(Parser, Debug)]
#[command(name = "gridvi", version, about = "A modal terminal text editor")]
struct Args {
    /// File to open at startup. If omitted, an empty unnamed buffer is used.
    path: Option<PathBuf>,
    /// Configuration file path, overriding discovery of `gridvi.toml`.
    #[arg(long = "config")]
    config: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum StartupError {
    #[error("failed to open {path:?}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// SIGINT sets this; the main loop observes it once per iteration and exits
/// cleanly rather than tearing down terminal state from a signal handler.
static SIGINT_RECEIVED: AtomicBool = AtomicBool::new(false);

extern "C" fn handle_sigint(_signum: libc::c_int) {
    SIGINT_RECEIVED.store(true, Ordering::SeqCst);
}

fn install_sigint_handler() {
    unsafe {
        libc::signal(libc::SIGINT, handle_sigint as libc::sighandler_t);
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn configure_logging() -> Option<WorkerGuard> {
    let log_path = Path::new(".").join("gridvi.log");
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }
    let file_appender = tracing_appender::rolling::never(".", "gridvi.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(writer)
        .try_init()
    {
        Ok(()) => Some(guard),
        Err(_) => None,
    }
}

/// Read `path`, or fall back to an empty unnamed buffer on failure —
/// file-open failure is recoverable locally (spec.md §7), not a startup
/// abort.
fn load_initial_buffer(path: Option<&PathBuf>) -> (String, Vec<u8>, Option<StartupError>) {
    let Some(path) = path else {
        return (String::new(), Vec::new(), None);
    };
    match std::fs::read(path) {
        Ok(bytes) => {
            let name = path.to_string_lossy().into_owned();
            (name, bytes, None)
        }
        Err(source) => {
            let err = StartupError::FileOpen {
                path: path.clone(),
                source,
            };
            error!(target: "io", path = %path.display(), error = %err, "file_open_failed");
            (String::new(), Vec::new(), Some(err))
        }
    }
}

fn style_for(is_cursor: bool, is_current_line: bool) -> Style {
    if is_cursor {
        Style::CursorHighlight
    } else if is_current_line {
        Style::LineHighlight
    } else {
        Style::Normal
    }
}

/// Paint the focused window's visible lines and the info line into the
/// renderer's back buffer, translating each `Rect`-local coordinate to
/// absolute screen space before writing.
fn draw_frame(editor: &Editor, renderer: &mut Renderer) {
    tracing::trace!(target: "render", "draw_frame");
    renderer.clear_back();
    let window = editor.focused_window();
    let buffer_id = window.buffer;
    let model = &editor.buffers.get(buffer_id).text;
    let view_rows = window.source.rows() as usize;
    let cursor_line_idx = model.line_index(window.cursor.line);

    let mut line_id = model.nth_line_clamped(window.y_offset);
    for row in 0..view_rows {
        let line_idx = window.y_offset + row;
        if line_idx >= model.line_count() {
            break;
        }
        let abs_row = window.source.to_screen_y(row as u16) as usize;
        let line = model.line(line_id);
        let is_current_line = line_idx == cursor_line_idx;
        let mut col = 0usize;
        for item in line.iter() {
            if line.is_newline(item) {
                break;
            }
            let symbol = line.symbol(item);
            let is_cursor = is_current_line && item == window.cursor.item;
            let style = style_for(is_cursor, is_current_line);
            for width_col in 0..symbol.screen_width() {
                let ch = if symbol.is_tab() { ' ' } else { symbol.byte() as char };
                let abs_col = window.source.to_screen_x((col + width_col) as u16) as usize;
                renderer.put(abs_col, abs_row, if width_col == 0 { ch } else { ' ' }, style);
            }
            col += symbol.screen_width();
        }
        if let Some(next) = model.next_line(line_id) {
            line_id = next;
        }
    }

    let info_row = window.info.to_screen_y(0) as usize;
    for (i, ch) in editor.status_message.chars().enumerate() {
        let abs_col = window.info.to_screen_x(i as u16) as usize;
        renderer.put(abs_col, info_row, ch, Style::InfoLine);
    }
}

/// Translate the focused window's cursor into absolute screen coordinates.
fn absolute_cursor(editor: &Editor) -> (usize, usize) {
    let window = editor.focused_window();
    let x = window.source.to_screen_x(window.cursor.pos.x as u16) as usize;
    let y = window.source.to_screen_y(window.cursor.pos.y.max(0) as u16) as usize;
    (x, y)
}

fn run_main_loop(editor: &mut Editor, reader: &mut RawReader, renderer: &mut Renderer) -> Result<()> {
    let mut stdout = std::io::stdout();
    draw_frame(editor, renderer);
    let (x, y) = absolute_cursor(editor);
    renderer.flush(&mut stdout, x, y)?;

    loop {
        if SIGINT_RECEIVED.load(Ordering::SeqCst) {
            info!(target: "runtime", "sigint_received_exiting");
            break;
        }

        let bytes = reader.read_bytes()?;
        if bytes.is_empty() {
            continue;
        }

        for byte in bytes {
            if let Some(user_cmd) = editor.input.feed(byte) {
                editor.user_queue.write(user_cmd);
            }
            while let Some(user_cmd) = editor.user_queue.read() {
                translate(editor, user_cmd);
            }
            while let Some(editor_cmd) = editor.editor_queue.read() {
                dispatch(editor, editor_cmd);
            }
        }

        if editor.exit_requested {
            info!(target: "runtime", "quit_command_exiting");
            break;
        }

        draw_frame(editor, renderer);
        let (x, y) = absolute_cursor(editor);
        renderer.flush(&mut stdout, x, y)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let _log_guard = configure_logging();
    install_panic_hook();
    install_sigint_handler();

    let args = Args::parse();
    info!(target: "runtime", "startup");

    let config = core_config::load_from(args.config.clone());
    let (filename, bytes, open_error) = load_initial_buffer(args.path.as_ref());

    let mut backend = CrosstermBackend::new();
    let guard = backend.enter_guard()?;

    let (cols, rows) = query_size(&config.file.terminal);
    let screen = Rect::root(Point::new(0, 0), Point::new(cols, rows));

    let mut editor = Editor::new(&filename, &bytes, config, screen);
    if let Some(err) = open_error {
        editor.status_message = format!("{err}");
    }

    let mut reader = RawReader::new();
    let mut renderer = Renderer::new(cols as usize, rows as usize);

    let result = run_main_loop(&mut editor, &mut reader, &mut renderer);

    drop(guard);
    result
}
