use sparkline_rs::SparklineError;
use sparkline_rs::api::builders::{
    BulletChart, ChartBuilder, PieChart, WhiskerChart, WhiskerState,
};
use sparkline_rs::api::{ChartType, StyleConfig, plot_frame};
use sparkline_rs::core::{NormalizedSeries, ValueScale};
use sparkline_rs::render::{Color, DrawOp, RenderFrame};

fn build_raw(builder: &dyn ChartBuilder, data: &[f64], config: &StyleConfig) -> RenderFrame {
    let series = NormalizedSeries::new(data, ValueScale::Raw).expect("series");
    builder.build(&series, config).expect("frame")
}

fn pie(percent: f64) -> RenderFrame {
    build_raw(&PieChart, &[percent], &StyleConfig::new(ChartType::Pie))
}

#[test]
fn pie_quarter_wedge_matches_svg_outline() {
    let wedge = PieChart::wedge(25.0, 10.0, 8.0).expect("wedge");
    assert_eq!(wedge.to_svg_path(), "M10,10 h8 A8,8 0 0,1 10,18 z");
}

#[test]
fn pie_large_arc_flag_switches_above_half() {
    let half = PieChart::wedge(50.0, 10.0, 8.0).expect("wedge");
    let more = PieChart::wedge(51.0, 10.0, 8.0).expect("wedge");
    assert_eq!(half.large_arc_flag, 0);
    assert_eq!(more.large_arc_flag, 1);
    assert_eq!(more.sweep_flag, 1);
}

#[test]
fn empty_pie_draws_only_the_remaining_disc() {
    let frame = pie(0.0);
    assert_eq!((frame.width, frame.height), (20.0, 20.0));
    assert_eq!(frame.ops_of_kind("path").count(), 0);
    assert_eq!(frame.ops_of_kind("ellipse_arc").count(), 1);
    assert_eq!(frame.ops[0], DrawOp::Fill(Color::LIGHT_GREY));
    assert_eq!(
        frame.ops[1],
        DrawOp::EllipseArc {
            cx: 10.0,
            cy: 10.0,
            rx: 8.0,
            ry: 8.0,
            start_deg: 0.0,
            end_deg: 360.0
        }
    );
}

#[test]
fn full_pie_draws_second_disc_in_share_color() {
    let frame = pie(100.0);
    assert_eq!(frame.ops_of_kind("path").count(), 0);
    assert_eq!(frame.ops_of_kind("ellipse_arc").count(), 2);
    assert_eq!(frame.ops[2], DrawOp::Fill(Color::RED));
}

#[test]
fn out_of_range_percentages_are_clamped() {
    assert_eq!(pie(150.0).ops, pie(100.0).ops);
    assert_eq!(pie(-5.0).ops, pie(0.0).ops);
}

#[test]
fn pie_reads_only_the_first_sample() {
    let frame = build_raw(&PieChart, &[45.0, 99.0], &StyleConfig::new(ChartType::Pie));
    assert_eq!(frame.ops, pie(45.0).ops);
}

#[test]
fn pie_needs_room_for_the_rim() {
    let config = StyleConfig::new(ChartType::Pie).with_diameter(4.0);
    let series = NormalizedSeries::new(&[10.0], ValueScale::Raw).expect("series");
    let err = PieChart.build(&series, &config).expect_err("tiny pie must fail");
    assert!(matches!(err, SparklineError::InvalidOption { .. }));
}

#[test]
fn bullet_scale_is_linear_in_good() {
    assert!((BulletChart::scale_x(85.0, 100.0, 100.0) - 85.0).abs() <= 1e-9);
    assert!((BulletChart::scale_x(85.0, 100.0, 200.0) - 170.0).abs() <= 1e-9);
    assert!((BulletChart::scale_x(50.0, 200.0, 100.0) - 25.0).abs() <= 1e-9);
}

#[test]
fn basic_bullet_draws_target_then_measure() {
    let config = StyleConfig::new(ChartType::Bullet)
        .with_height(15.0)
        .with_target(80.0)
        .with_bullet_ranges(100.0, None, None);
    let frame = build_raw(&BulletChart, &[85.0], &config);

    assert_eq!((frame.width, frame.height), (100.0, 15.0));
    assert_eq!(frame.background_color, Color::from_rgb8(0xee, 0xee, 0xee));
    assert_eq!(
        frame.ops,
        vec![
            DrawOp::Fill(Color::BLACK),
            DrawOp::Rectangle {
                x0: 80.0,
                y0: 2.0,
                x1: 81.0,
                y1: 12.0
            },
            DrawOp::Fill(Color::BLACK),
            DrawOp::Rectangle {
                x0: 0.0,
                y0: 5.0,
                x1: 85.0,
                y1: 10.0
            },
        ]
    );
}

#[test]
fn bullet_bad_range_is_painted_over_satisfactory() {
    let config = StyleConfig::new(ChartType::Bullet)
        .with_height(15.0)
        .with_bullet_ranges(100.0, Some(80.0), Some(60.0));
    let frame = build_raw(&BulletChart, &[85.0], &config);

    assert_eq!(frame.ops[0], DrawOp::Fill(config.satisfactory_color));
    assert_eq!(
        frame.ops[1],
        DrawOp::Rectangle {
            x0: 0.0,
            y0: 0.0,
            x1: 80.0,
            y1: 15.0
        }
    );
    assert_eq!(frame.ops[2], DrawOp::Fill(config.bad_color));
    assert_eq!(
        frame.ops[3],
        DrawOp::Rectangle {
            x0: 0.0,
            y0: 0.0,
            x1: 60.0,
            y1: 15.0
        }
    );
}

#[test]
fn wide_bullet_scales_measure_with_width() {
    let config = StyleConfig::new(ChartType::Bullet)
        .with_width(200.0)
        .with_bullet_ranges(100.0, None, None);
    let frame = build_raw(&BulletChart, &[85.0], &config);

    assert_eq!(frame.width, 200.0);
    let Some(DrawOp::Rectangle { x1, .. }) = frame.ops.last() else {
        panic!("expected measure rectangle");
    };
    assert!((x1 - 170.0).abs() <= 1e-9);
}

#[test]
fn bullet_without_good_reports_missing_option() {
    let config = StyleConfig::new(ChartType::Bullet).with_target(80.0);
    let err = plot_frame(&[85.0], &config).expect_err("good is required");
    assert!(matches!(
        err,
        SparklineError::MissingOption {
            option: "good",
            chart_type: "bullet"
        }
    ));
}

#[test]
fn bullet_rejects_non_positive_good() {
    let config = StyleConfig::new(ChartType::Bullet).with_bullet_ranges(0.0, None, None);
    let err = plot_frame(&[85.0], &config).expect_err("zero good must fail");
    assert!(matches!(err, SparklineError::InvalidOption { .. }));
}

#[test]
fn whisker_lines_follow_state_and_color() {
    let config = StyleConfig::new(ChartType::Whisker);
    let frame = build_raw(&WhiskerChart, &[2.0, 0.0, -1.0, 1.0, -2.0], &config);

    assert_eq!(frame.width, 9.0);
    assert_eq!(
        frame.ops,
        vec![
            DrawOp::Stroke(Color::RED),
            DrawOp::Line {
                x0: 0.0,
                y0: 6.0,
                x1: 0.0,
                y1: 0.0
            },
            DrawOp::Stroke(Color::BLACK),
            DrawOp::Line {
                x0: 4.0,
                y0: 7.0,
                x1: 4.0,
                y1: 14.0
            },
            DrawOp::Stroke(Color::BLACK),
            DrawOp::Line {
                x0: 6.0,
                y0: 6.0,
                x1: 6.0,
                y1: 0.0
            },
            DrawOp::Stroke(Color::RED),
            DrawOp::Line {
                x0: 8.0,
                y0: 7.0,
                x1: 8.0,
                y1: 14.0
            },
        ]
    );
}

#[test]
fn whisker_step_is_truncated_to_whole_pixels() {
    let config = StyleConfig::new(ChartType::Whisker).with_step(5.7);
    let frame = build_raw(&WhiskerChart, &[1.0, 1.0, -1.0], &config);
    assert_eq!(frame.width, 14.0);
}

#[test]
fn whisker_rejects_values_outside_five_states() {
    let config = StyleConfig::new(ChartType::Whisker);
    let err = plot_frame(&[1.0, 3.0, -1.0], &config).expect_err("3 is not a whisker state");
    assert!(matches!(err, SparklineError::InvalidData(_)));
}

#[test]
fn whisker_state_classification() {
    let up = WhiskerState::from_value(2.0).expect("state");
    assert!(up.is_up());
    assert!(up.is_exceptional());
    let down = WhiskerState::from_value(-1.0).expect("state");
    assert!(!down.is_up());
    assert!(!down.is_exceptional());
}
