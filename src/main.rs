mod input;
mod renderer;

use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlCanvasElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use input::{screen_to_canvas_coords, GestureTracker, PointerKind};
use renderer::draw_board;
use tentori_core::{BoardLayout, Player, Session, Winner};

#[function_component(App)]
fn app() -> Html {
    // Session and gesture are mutated synchronously inside event handlers;
    // the use_state mirrors below only feed the HTML shell.
    let session = use_mut_ref(Session::new);
    let tracker = use_mut_ref(GestureTracker::default);
    let layout_live = use_mut_ref(|| BoardLayout::from_container_width(0.0));
    let layout = use_state(|| BoardLayout::from_container_width(0.0));
    let scores = use_state(|| (0u32, 0u32));
    let current = use_state(|| Player::One);
    let winner = use_state(|| None::<Winner>);
    let canvas_ref = use_node_ref();
    let container_ref = use_node_ref();

    let layout_value = *layout;
    let scores_value = *scores;
    let current_value = *current;
    let winner_value = *winner;

    // Reads only shared refs, so clones stay valid for listeners registered
    // once at mount.
    let redraw: Rc<dyn Fn()> = {
        let canvas_ref = canvas_ref.clone();
        let session = session.clone();
        let tracker = tracker.clone();
        let layout_live = layout_live.clone();
        Rc::new(move || {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                draw_board(
                    &canvas,
                    &session.borrow(),
                    tracker.borrow().gesture(),
                    *layout_live.borrow(),
                );
            }
        })
    };

    let sync_shell: Rc<dyn Fn()> = {
        let session = session.clone();
        let scores = scores.clone();
        let current = current.clone();
        let winner = winner.clone();
        Rc::new(move || {
            let session = session.borrow();
            scores.set((session.score(Player::One), session.score(Player::Two)));
            current.set(session.current_player());
            winner.set(session.winner());
        })
    };

    let finish_drag: Rc<dyn Fn()> = {
        let session = session.clone();
        let tracker = tracker.clone();
        let redraw = redraw.clone();
        let sync_shell = sync_shell.clone();
        Rc::new(move || {
            let gesture = tracker.borrow_mut().on_drag_end();
            let outcome = session.borrow_mut().commit_move(gesture);
            if outcome.accepted {
                sync_shell();
                let session = session.borrow();
                if session.is_game_over() {
                    gloo::console::log!(
                        "session: game over",
                        format!(
                            "{} - {}",
                            session.score(Player::One),
                            session.score(Player::Two)
                        )
                    );
                }
            }
            // The provisional line is gone either way.
            redraw();
        })
    };

    let restart: Rc<dyn Fn()> = {
        let session = session.clone();
        let tracker = tracker.clone();
        let redraw = redraw.clone();
        let sync_shell = sync_shell.clone();
        Rc::new(move || {
            gloo::console::log!("session: restart");
            session.borrow_mut().restart();
            tracker.borrow_mut().on_drag_end();
            sync_shell();
            redraw();
        })
    };

    // Initial sizing plus resize tracking; recomputation is idempotent and
    // every application triggers a redraw through the layout effect.
    {
        let container_ref = container_ref.clone();
        let layout = layout.clone();
        let layout_live = layout_live.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window available");
            let apply = Rc::new(move || {
                let width = container_ref
                    .cast::<Element>()
                    .map(|container| container.client_width() as f64)
                    .unwrap_or(0.0);
                let next = BoardLayout::from_container_width(width);
                *layout_live.borrow_mut() = next;
                layout.set(next);
            });
            apply();
            let listener = EventListener::new(&window, "resize", {
                let apply = apply.clone();
                move |_| apply()
            });
            move || drop(listener)
        });
    }

    // Redraw after the canvas element picks up new pixel dimensions.
    {
        let redraw = redraw.clone();
        use_effect_with(layout_value, move |_| {
            redraw();
            || ()
        });
    }

    // Touch adapter. Registered non-passive so prevent_default suppresses
    // scrolling and pinch-zoom for the gesture's duration.
    {
        let canvas_ref = canvas_ref.clone();
        let tracker = tracker.clone();
        let layout_live = layout_live.clone();
        let redraw = redraw.clone();
        let finish_drag = finish_drag.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let options = EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: false,
                };
                {
                    let canvas = canvas.clone();
                    let tracker = tracker.clone();
                    let layout_live = layout_live.clone();
                    let redraw = redraw.clone();
                    listeners.push(EventListener::new_with_options(
                        &canvas.clone(),
                        "touchstart",
                        options,
                        move |event: &Event| {
                            let Some(event) = event.dyn_ref::<TouchEvent>() else {
                                return;
                            };
                            event.prevent_default();
                            let Some(touch) = event.touches().get(0) else {
                                return;
                            };
                            let Some((x, y)) = screen_to_canvas_coords(
                                touch.client_x() as f64,
                                touch.client_y() as f64,
                                &canvas,
                            ) else {
                                return;
                            };
                            if tracker.borrow_mut().on_drag_start(
                                &layout_live.borrow(),
                                PointerKind::Touch,
                                x,
                                y,
                            ) {
                                redraw();
                            }
                        },
                    ));
                }
                {
                    let canvas = canvas.clone();
                    let tracker = tracker.clone();
                    let layout_live = layout_live.clone();
                    let redraw = redraw.clone();
                    listeners.push(EventListener::new_with_options(
                        &canvas.clone(),
                        "touchmove",
                        options,
                        move |event: &Event| {
                            let Some(event) = event.dyn_ref::<TouchEvent>() else {
                                return;
                            };
                            event.prevent_default();
                            let Some(touch) = event.touches().get(0) else {
                                return;
                            };
                            let Some((x, y)) = screen_to_canvas_coords(
                                touch.client_x() as f64,
                                touch.client_y() as f64,
                                &canvas,
                            ) else {
                                return;
                            };
                            if tracker.borrow_mut().on_drag_update(
                                &layout_live.borrow(),
                                PointerKind::Touch,
                                x,
                                y,
                            ) {
                                redraw();
                            }
                        },
                    ));
                }
                // touchcancel is an abandoned drag; treat it exactly like a
                // normal end.
                for event_type in ["touchend", "touchcancel"] {
                    let finish_drag = finish_drag.clone();
                    listeners.push(EventListener::new_with_options(
                        &canvas,
                        event_type,
                        options,
                        move |event: &Event| {
                            event.prevent_default();
                            finish_drag();
                        },
                    ));
                }
            }
            move || drop(listeners)
        });
    }

    // Mouse adapter.
    let on_mouse_down = {
        let canvas_ref = canvas_ref.clone();
        let tracker = tracker.clone();
        let layout_live = layout_live.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            let Some((x, y)) = screen_to_canvas_coords(
                event.client_x() as f64,
                event.client_y() as f64,
                &canvas,
            ) else {
                return;
            };
            if tracker
                .borrow_mut()
                .on_drag_start(&layout_live.borrow(), PointerKind::Mouse, x, y)
            {
                redraw();
            }
        })
    };
    let on_mouse_move = {
        let canvas_ref = canvas_ref.clone();
        let tracker = tracker.clone();
        let layout_live = layout_live.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            let Some((x, y)) = screen_to_canvas_coords(
                event.client_x() as f64,
                event.client_y() as f64,
                &canvas,
            ) else {
                return;
            };
            if tracker
                .borrow_mut()
                .on_drag_update(&layout_live.borrow(), PointerKind::Mouse, x, y)
            {
                redraw();
            }
        })
    };
    // Leaving the surface mid-drag ends the gesture like a release.
    let on_mouse_up = {
        let finish_drag = finish_drag.clone();
        Callback::from(move |_: MouseEvent| finish_drag())
    };
    let on_mouse_leave = {
        let finish_drag = finish_drag.clone();
        Callback::from(move |_: MouseEvent| finish_drag())
    };

    let on_restart = {
        let restart = restart.clone();
        Callback::from(move |_: MouseEvent| restart())
    };
    let on_play_again = {
        let restart = restart.clone();
        Callback::from(move |_: MouseEvent| restart())
    };

    let canvas_px = layout_value.canvas_size as u32;
    let overlay = match winner_value {
        Some(winner) => {
            let (glyph, headline, note) = match winner {
                Winner::Player(player) => (
                    "\u{1F389}",
                    format!("Player {} wins!", player.number()),
                    "Congratulations on your victory!",
                ),
                Winner::Draw => (
                    "\u{1F3C5}",
                    "It's a draw!".to_string(),
                    "Both players played excellently!",
                ),
            };
            html! {
                <div class="game-over-backdrop">
                    <div class="game-over-card">
                        <div class="game-over-glyph">{ glyph }</div>
                        <h3 class="game-over-title">{ headline }</h3>
                        <p class="game-over-note">{ note }</p>
                        <button class="reset-button" onclick={on_play_again}>
                            { "\u{21BA} Play Again" }
                        </button>
                    </div>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <main class="app">
            <div class="board-panel" ref={container_ref}>
                <canvas
                    ref={canvas_ref}
                    class="board-canvas"
                    width={canvas_px.to_string()}
                    height={canvas_px.to_string()}
                    onmousedown={on_mouse_down}
                    onmousemove={on_mouse_move}
                    onmouseup={on_mouse_up}
                    onmouseleave={on_mouse_leave}
                />
            </div>
            <aside class="side-panel">
                <h2 class="title">{ "\u{1F3C6} Dots and Boxes" }</h2>
                <p class="subtitle">{ "Connect the dots to create boxes and win!" }</p>
                { score_card(Player::One, scores_value.0, current_value) }
                { score_card(Player::Two, scores_value.1, current_value) }
                <button class="reset-button" onclick={on_restart}>
                    { "\u{21BA} Reset Game" }
                </button>
            </aside>
            { overlay }
        </main>
    }
}

fn score_card(player: Player, score: u32, current: Player) -> Html {
    let class = classes!(
        "score-card",
        match player {
            Player::One => "player-one",
            Player::Two => "player-two",
        },
        (player == current).then_some("active"),
    );
    html! {
        <div class={class}>
            <span class="player-name">{ format!("Player {}", player.number()) }</span>
            <span class="player-score">{ format!("{score} points") }</span>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
