use super::*;

#[test]
fn window_smaller_than_width_shows_all_pages() {
    assert_eq!(page_window(1, 3, 5), vec![1, 2, 3]);
}

#[test]
fn window_centers_on_current_page() {
    assert_eq!(page_window(5, 9, 5), vec![3, 4, 5, 6, 7]);
}

#[test]
fn window_clamps_at_the_start() {
    assert_eq!(page_window(1, 9, 5), vec![1, 2, 3, 4, 5]);
    assert_eq!(page_window(2, 9, 5), vec![1, 2, 3, 4, 5]);
}

#[test]
fn window_clamps_at_the_end() {
    assert_eq!(page_window(9, 9, 5), vec![5, 6, 7, 8, 9]);
    assert_eq!(page_window(8, 9, 5), vec![5, 6, 7, 8, 9]);
}

#[test]
fn out_of_range_current_is_clamped() {
    assert_eq!(page_window(40, 4, 5), vec![1, 2, 3, 4]);
    assert_eq!(page_window(0, 4, 5), vec![1, 2, 3, 4]);
}

#[test]
fn degenerate_inputs_yield_empty_window() {
    assert!(page_window(1, 0, 5).is_empty());
    assert!(page_window(1, 9, 0).is_empty());
}
