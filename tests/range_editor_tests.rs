use approx::assert_abs_diff_eq;
use liquidity_range::api::VolatilityPreset;
use liquidity_range::core::DEPTH_SAMPLE_COUNT;
use liquidity_range::interaction::{DragHandle, DragPhase, resolve_drag};
use liquidity_range::{RangeEditor, RangeEditorConfig, RangeError};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn editor() -> RangeEditor {
    RangeEditor::open_from_prices(&[100.0], RangeEditorConfig::default()).expect("editor")
}

fn assert_domain(editor: &RangeEditor, min: f64, max: f64) {
    assert_abs_diff_eq!(editor.domain().min(), min, epsilon = 1e-9);
    assert_abs_diff_eq!(editor.domain().max(), max, epsilon = 1e-9);
}

#[test]
fn open_seeds_range_around_last_price() {
    let editor = editor();

    assert_eq!(editor.last_price(), 100.0);
    assert_abs_diff_eq!(editor.user_range().input_min, 85.0, epsilon = 1e-9);
    assert_abs_diff_eq!(editor.user_range().input_max, 115.0, epsilon = 1e-9);
    assert_eq!(editor.user_range(), editor.committed_range());
    // 85 sits below 75 * 1.2, so the initial domain is already widened.
    assert_domain(&editor, 62.5, 137.5);
    assert!(editor.is_last_price_in_range());
}

#[test]
fn open_rejects_empty_series_and_bad_config() {
    let empty = RangeEditor::open(&[], RangeEditorConfig::default());
    assert!(matches!(empty, Err(RangeError::InvalidInput(_))));

    let config = RangeEditorConfig::default().with_initial_factors(1.2, 0.8);
    let inverted = RangeEditor::open_from_prices(&[100.0], config);
    assert!(matches!(inverted, Err(RangeError::InvalidConfig(_))));
}

#[test]
fn bounds_are_clamped_against_each_other() {
    let mut editor = editor();

    assert_eq!(editor.update_min(-5.0, false), 0.0);
    let max = editor.user_range().input_max;
    assert_eq!(editor.update_min(500.0, false), max);
    assert_eq!(editor.update_max(10.0, false), editor.user_range().input_min);
    assert!(editor.user_range().input_min <= editor.user_range().input_max);
}

#[test]
fn only_committed_updates_widen_domain() {
    let mut editor = editor();

    editor.update_max(200.0, false);
    assert_domain(&editor, 62.5, 137.5);
    assert_abs_diff_eq!(editor.committed_range().input_max, 115.0, epsilon = 1e-9);

    editor.update_max(200.0, true);
    assert_eq!(editor.committed_range().input_max, 200.0);
    assert_domain(&editor, 0.0, 250.0);
}

#[test]
fn drag_phases_follow_commit_rules() {
    let mut editor = editor();
    let scale = editor.price_scale(388.0).expect("scale");

    assert_eq!(editor.drag_move(DragHandle::Upper, scale, 112.0), Some(122.5));
    assert_eq!(editor.user_range().input_max, 122.5);
    assert_domain(&editor, 62.5, 137.5);

    assert_eq!(editor.drag_end(DragHandle::Upper, scale, 92.0), Some(127.5));
    assert_domain(&editor, 62.5, 137.5);

    assert_eq!(editor.drag_submit(DragHandle::Lower, scale, 292.0), Some(77.5));
    assert_eq!(editor.committed_range().input_min, 77.5);
    assert_domain(&editor, 43.75, 156.25);
}

#[test]
fn unmappable_drag_sample_leaves_state_untouched() {
    let mut editor = editor();
    let scale = editor.price_scale(388.0).expect("scale");
    let before = editor.clone();

    assert_eq!(editor.drag(DragHandle::Lower, DragPhase::Submit, scale, f64::NAN), None);
    assert_eq!(editor, before);
}

#[test]
fn typed_price_is_rounded_and_committed() {
    let mut editor = editor();

    let value = editor
        .submit_text(DragHandle::Lower, "90.123456")
        .expect("typed price");
    assert_abs_diff_eq!(value, 90.1235, epsilon = 1e-9);
    assert_abs_diff_eq!(editor.committed_range().input_min, 90.1235, epsilon = 1e-9);
    assert_domain(&editor, 43.75, 156.25);
}

#[test]
fn garbage_text_is_rejected_without_side_effects() {
    let mut editor = editor();
    let before = editor.clone();

    let result = editor.submit_text(DragHandle::Upper, "12abc");
    assert!(matches!(result, Err(RangeError::InvalidInput(_))));
    assert_eq!(editor, before);
}

#[test]
fn presets_replace_both_bounds() {
    let mut editor = editor();

    editor.apply_preset(VolatilityPreset::Wide);
    assert_abs_diff_eq!(editor.user_range().input_min, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(editor.user_range().input_max, 200.0, epsilon = 1e-9);
    assert_eq!(editor.user_range(), editor.committed_range());
    assert_domain(&editor, 0.0, 250.0);

    let mut tight = self::editor();
    tight.apply_preset(VolatilityPreset::Tight);
    assert_domain(&tight, 43.75, 156.25);
}

#[test]
fn debounced_moves_apply_latest_sample_only() {
    let mut editor = editor();
    let scale = editor.price_scale(388.0).expect("scale");
    let mut debouncer = editor.move_debouncer();

    for (pixel, now_ms) in [(112.0, 0), (92.0, 50)] {
        let update =
            resolve_drag(DragHandle::Upper, DragPhase::Move, scale, pixel).expect("update");
        debouncer.push(update, now_ms);
    }

    assert!(debouncer.poll(120).is_none());
    let update = debouncer.poll(150).expect("settled update");
    assert_eq!(editor.apply_drag(update), 127.5);
    assert!(debouncer.poll(1_000).is_none());
}

#[test]
fn depth_ladder_follows_current_domain() {
    let editor = editor();
    let ladder = editor.depth_samples(&mut StdRng::seed_from_u64(5));

    assert_eq!(ladder.len(), DEPTH_SAMPLE_COUNT);
    assert_abs_diff_eq!(ladder[0].tick, editor.domain().min(), epsilon = 1e-12);
}

#[test]
fn zero_last_price_cannot_open_an_editor() {
    let result = RangeEditor::open_from_prices(&[0.0], RangeEditorConfig::default());
    assert!(matches!(result, Err(RangeError::InvalidInput(_))));
}

#[test]
fn first_commit_widens_once_then_domain_settles() {
    let mut editor = editor();

    editor.submit_text(DragHandle::Upper, "115").expect("typed price");
    assert_domain(&editor, 43.75, 156.25);

    editor.submit_text(DragHandle::Upper, "115").expect("typed price");
    assert_domain(&editor, 43.75, 156.25);
}
