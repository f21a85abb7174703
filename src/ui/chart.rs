use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ledger::{BudgetStatus, CategoryShare};
use crate::ui::theme::Palette;
use crate::ui::util::{format_amount, progress_bar, truncate};

/// One labelled value of a category breakdown.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChartSlice {
    pub(crate) label: String,
    pub(crate) value: Decimal,
    pub(crate) series: usize,
}

impl ChartSlice {
    pub(crate) fn from_shares(shares: &[CategoryShare]) -> Vec<ChartSlice> {
        shares
            .iter()
            .map(|s| ChartSlice {
                label: s.category.to_string(),
                value: s.value,
                series: s.category.index(),
            })
            .collect()
    }

    pub(crate) fn from_allocations(overview: &[BudgetStatus]) -> Vec<ChartSlice> {
        overview
            .iter()
            .map(|s| ChartSlice {
                label: s.category.to_string(),
                value: s.total,
                series: s.category.index(),
            })
            .collect()
    }
}

/// Renders a labelled category-value breakdown inside `block`.
pub(crate) trait BreakdownChart {
    fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        block: Block<'_>,
        slices: &[ChartSlice],
        palette: &Palette,
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChartStyle {
    Bars,
    Shares,
}

impl ChartStyle {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bars" | "bar" => Some(Self::Bars),
            "shares" | "share" | "pie" => Some(Self::Shares),
            _ => None,
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Bars => "bars",
            Self::Shares => "shares",
        }
    }

    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::Bars => Self::Shares,
            Self::Shares => Self::Bars,
        }
    }

    pub(crate) fn chart(self) -> &'static dyn BreakdownChart {
        match self {
            Self::Bars => &BarBreakdown,
            Self::Shares => &ShareBreakdown,
        }
    }
}

// ── Vertical bars ────────────────────────────────────────────

pub(crate) struct BarBreakdown;

impl BreakdownChart for BarBreakdown {
    fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        block: Block<'_>,
        slices: &[ChartSlice],
        palette: &Palette,
    ) {
        let bars: Vec<Bar> = slices
            .iter()
            .map(|slice| {
                let color = palette.series_color(slice.series);
                Bar::default()
                    .value(slice.value.round().to_u64().unwrap_or(0))
                    .text_value(format_amount(slice.value))
                    .label(Line::from(truncate(&slice.label, 12)))
                    .style(Style::default().fg(color))
                    .value_style(
                        Style::default()
                            .fg(palette.header_fg)
                            .bg(color)
                            .add_modifier(Modifier::BOLD),
                    )
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(12)
            .bar_gap(1)
            .label_style(palette.dim_style());

        f.render_widget(chart, area);
    }
}

// ── Proportional share bars ──────────────────────────────────

pub(crate) struct ShareBreakdown;

/// Each slice's fraction of the total. All zero when the total is zero.
pub(crate) fn share_ratios(slices: &[ChartSlice]) -> Vec<f64> {
    let total: Decimal = slices.iter().map(|s| s.value).sum();
    slices
        .iter()
        .map(|s| {
            if total > Decimal::ZERO {
                (s.value / total).to_f64().unwrap_or(0.0)
            } else {
                0.0
            }
        })
        .collect()
}

impl BreakdownChart for ShareBreakdown {
    fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        block: Block<'_>,
        slices: &[ChartSlice],
        palette: &Palette,
    ) {
        let bar_width = (area.width as usize).saturating_sub(44).clamp(4, 30);
        let lines: Vec<Line> = slices
            .iter()
            .zip(share_ratios(slices))
            .map(|(slice, ratio)| {
                let color = palette.series_color(slice.series);
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(color)),
                    Span::styled(
                        format!("{:<16}", truncate(&slice.label, 15)),
                        palette.normal_style(),
                    ),
                    Span::styled(progress_bar(ratio, bar_width), Style::default().fg(color)),
                    Span::styled(
                        format!(" {:>5.1}% ", ratio * 100.0),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format_amount(slice.value), palette.dim_style()),
                ])
            })
            .collect();

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::Category;

    fn slice(label: &str, value: Decimal) -> ChartSlice {
        ChartSlice {
            label: label.into(),
            value,
            series: 0,
        }
    }

    #[test]
    fn test_chart_style_parse() {
        assert_eq!(ChartStyle::parse("bars"), Some(ChartStyle::Bars));
        assert_eq!(ChartStyle::parse(" SHARES "), Some(ChartStyle::Shares));
        assert_eq!(ChartStyle::parse("pie"), Some(ChartStyle::Shares));
        assert_eq!(ChartStyle::parse("donut"), None);
    }

    #[test]
    fn test_chart_style_toggle() {
        assert_eq!(ChartStyle::Bars.toggled(), ChartStyle::Shares);
        assert_eq!(ChartStyle::Shares.toggled().as_str(), "bars");
    }

    #[test]
    fn test_share_ratios() {
        let ratios = share_ratios(&[slice("Food & Drink", dec!(30)), slice("Other", dec!(10))]);
        assert!((ratios[0] - 0.75).abs() < 1e-9);
        assert!((ratios[1] - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_slices_keep_category_colour_slot() {
        let shares = [
            CategoryShare {
                category: Category::Education,
                value: dec!(12),
            },
            CategoryShare {
                category: Category::Other,
                value: dec!(3),
            },
        ];
        let slices = ChartSlice::from_shares(&shares);
        assert_eq!(slices[0].label, "Education");
        assert_eq!(slices[0].series, 3);
        assert_eq!(slices[1].series, 5);
    }

    #[test]
    fn test_share_ratios_zero_total() {
        let ratios = share_ratios(&[slice("Utilities", Decimal::ZERO)]);
        assert_eq!(ratios, [0.0]);
        assert!(share_ratios(&[]).is_empty());
    }
}
