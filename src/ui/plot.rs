use eframe::egui::{self, Color32, RichText, Sense, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::color::{generate_palette, ContinuousScale};
use crate::stats::RankedTotals;
use crate::views::{CountryTrend, YearSnapshot};

const LINE_COLOR: Color32 = Color32::from_rgb(99, 110, 250);

// ---------------------------------------------------------------------------
// Bar chart (Home: top countries)
// ---------------------------------------------------------------------------

/// Render ranked totals as one bar per group, labelled on the x axis.
pub fn ranked_bar_chart(ui: &mut Ui, id: &str, totals: &RankedTotals, x_label: &str, y_label: &str) {
    let labels = totals.labels();
    let colors = generate_palette(totals.len());

    let bars: Vec<Bar> = totals
        .entries
        .iter()
        .zip(colors)
        .enumerate()
        .map(|(i, ((name, total), color))| {
            Bar::new(i as f64, *total)
                .name(name)
                .fill(color)
                .width(0.7)
        })
        .collect();

    Plot::new(id)
        .height(360.0)
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .include_y(0.0)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(y_label));
        });
}

// ---------------------------------------------------------------------------
// Line chart (Country Analysis)
// ---------------------------------------------------------------------------

/// Render a country's usage over time.
pub fn trend_line_chart(ui: &mut Ui, trend: &CountryTrend) {
    let series: Vec<[f64; 2]> = trend
        .points
        .iter()
        .map(|&(year, value)| [f64::from(year), value])
        .collect();

    ui.label(RichText::new(trend.title()).strong());
    Plot::new("country_trend")
        .height(360.0)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Pesticide Use (tonnes)")
        .allow_boxed_zoom(true)
        .x_axis_formatter(|mark, _range| {
            if mark.value.fract().abs() < 1e-6 {
                format!("{}", mark.value as i64)
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from_iter(series.iter().copied()))
                    .name(&trend.country)
                    .color(LINE_COLOR)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::from_iter(series.iter().copied()))
                    .radius(3.0)
                    .color(LINE_COLOR),
            );
        });
}

// ---------------------------------------------------------------------------
// Choropleth (Global Trends)
// ---------------------------------------------------------------------------

/// Render each located country as a marker at its centroid, coloured by
/// value, followed by a colour legend.
pub fn choropleth(ui: &mut Ui, snapshot: &YearSnapshot) {
    let (min, max) = snapshot.value_range;
    let scale = ContinuousScale::new(min, max);
    let hover_values = snapshot.values.clone();

    ui.label(RichText::new(snapshot.title()).strong());
    Plot::new("world_map")
        .height(420.0)
        .data_aspect(1.0)
        .include_x(-180.0)
        .include_x(180.0)
        .include_y(-60.0)
        .include_y(85.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .label_formatter(move |name, point| {
            match hover_values.iter().find(|(area, _)| area == name) {
                Some((area, value)) => format!("{area}\nValue: {value:.2}"),
                None => format!("{:.1}°, {:.1}°", point.y, point.x),
            }
        })
        .show(ui, |plot_ui| {
            for mp in &snapshot.located {
                plot_ui.points(
                    Points::new(PlotPoints::from(vec![[mp.lon, mp.lat]]))
                        .name(&mp.area)
                        .radius(7.0)
                        .filled(true)
                        .color(scale.color_for(mp.value)),
                );
            }
        });

    color_legend(ui, &scale);
}

fn color_legend(ui: &mut Ui, scale: &ContinuousScale) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Value");
        let entries = scale.legend_entries(32);
        if let (Some(first), Some(last)) = (entries.first(), entries.last()) {
            ui.label(format!("{:.0}", first.0));
            ui.spacing_mut().item_spacing.x = 0.0;
            for (_, color) in &entries {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 14.0), Sense::hover());
                ui.painter().rect_filled(rect, 0.0, *color);
            }
            ui.spacing_mut().item_spacing.x = 6.0;
            ui.label(format!("{:.0}", last.0));
        }
    });
}
