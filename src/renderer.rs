use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use tentori_core::{
    BoardLayout, Dot, DragGesture, Player, Session, DOT_DIAMETER, GRID_SIZE,
};

const DOT_COLOR: &str = "white";
const INVALID_DRAG_COLOR: &str = "#999";
const LINE_WIDTH: f64 = 4.0;
const DRAG_LINE_WIDTH: f64 = 3.0;
const DRAG_DASH_PX: f64 = 5.0;

fn player_stroke(player: Player) -> &'static str {
    match player {
        Player::One => "#ef4444",
        Player::Two => "#3b82f6",
    }
}

fn player_fill(player: Player) -> &'static str {
    match player {
        Player::One => "rgba(239, 68, 68, 0.2)",
        Player::Two => "rgba(59, 130, 246, 0.2)",
    }
}

/// Redraw the whole board from current state. A missing or unready surface
/// is a benign no-op; other context failures are reported and swallowed.
pub(crate) fn draw_board(
    canvas: &HtmlCanvasElement,
    session: &Session,
    gesture: DragGesture,
    layout: BoardLayout,
) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };
    if let Err(err) = draw_layers(&ctx, canvas, session, gesture, layout) {
        gloo::console::log!("renderer: draw failed", err);
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn draw_layers(
    ctx: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    session: &Session,
    gesture: DragGesture,
    layout: BoardLayout,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);

    draw_dots(ctx, layout)?;
    draw_boxes(ctx, session, layout);
    draw_lines(ctx, session, layout);
    draw_drag_line(ctx, session, gesture, layout)?;
    Ok(())
}

fn draw_dots(ctx: &CanvasRenderingContext2d, layout: BoardLayout) -> Result<(), JsValue> {
    ctx.set_fill_style_str(DOT_COLOR);
    for col in 0..GRID_SIZE {
        for row in 0..GRID_SIZE {
            let (x, y) = layout.dot_px(Dot::new(col, row));
            ctx.begin_path();
            ctx.arc(x, y, DOT_DIAMETER / 2.0, 0.0, std::f64::consts::TAU)?;
            ctx.fill();
        }
    }
    Ok(())
}

fn draw_boxes(ctx: &CanvasRenderingContext2d, session: &Session, layout: BoardLayout) {
    for cell in session.boxes() {
        let (x, y) = layout.dot_px(cell.origin);
        ctx.set_fill_style_str(player_fill(cell.player));
        ctx.fill_rect(x, y, layout.cell_size, layout.cell_size);
    }
}

fn draw_lines(ctx: &CanvasRenderingContext2d, session: &Session, layout: BoardLayout) {
    ctx.set_line_width(LINE_WIDTH);
    for line in session.lines() {
        let (a, b) = line.key.endpoints();
        let (ax, ay) = layout.dot_px(a);
        let (bx, by) = layout.dot_px(b);
        ctx.begin_path();
        ctx.move_to(ax, ay);
        ctx.line_to(bx, by);
        ctx.set_stroke_style_str(player_stroke(line.player));
        ctx.stroke();
    }
}

fn draw_drag_line(
    ctx: &CanvasRenderingContext2d,
    session: &Session,
    gesture: DragGesture,
    layout: BoardLayout,
) -> Result<(), JsValue> {
    let Some((start, end)) = gesture.endpoints() else {
        return Ok(());
    };
    let (ax, ay) = layout.dot_px(start);
    let (bx, by) = layout.dot_px(end);
    let color = if gesture.is_valid_candidate() {
        player_stroke(session.current_player())
    } else {
        INVALID_DRAG_COLOR
    };
    let dash = Array::of2(
        &JsValue::from_f64(DRAG_DASH_PX),
        &JsValue::from_f64(DRAG_DASH_PX),
    );
    ctx.begin_path();
    ctx.move_to(ax, ay);
    ctx.line_to(bx, by);
    ctx.set_stroke_style_str(color);
    ctx.set_line_dash(&dash)?;
    ctx.set_line_width(DRAG_LINE_WIDTH);
    ctx.stroke();
    ctx.set_line_dash(&Array::new())?;
    Ok(())
}
