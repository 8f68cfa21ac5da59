//! "Mes stats" view.

use dioxus::prelude::*;
use vintrack_core::catalog::{format_eur, stats_snapshot, TimeRange, Trend};

use crate::components::{icon, Glyph};

#[component]
pub fn StatsView() -> Element {
    let mut range = use_signal(TimeRange::default);
    let stats = stats_snapshot(range());

    rsx! {
        div { class: "view stats-view",
            div { class: "view-header row",
                div {
                    h1 { class: "view-title", "Mes statistiques" }
                    p { class: "muted", "Suivez vos performances et analysez vos résultats." }
                }
                select {
                    class: "input-field range-select",
                    value: "{range().key()}",
                    onchange: move |e| {
                        if let Some(r) = TimeRange::from_key(&e.value()) {
                            range.set(r);
                        }
                    },
                    for r in TimeRange::ALL {
                        option { key: "{r.key()}", value: "{r.key()}", selected: r == range(), "{r.label()}" }
                    }
                }
            }

            div { class: "metric-grid",
                MetricCard { title: "Gains totaux", value: stats.earnings_label(), trend: stats.earnings_trend }
                MetricCard { title: "Achats réalisés", value: stats.purchases_label(), trend: stats.purchases_trend }
                MetricCard { title: "Vues totales", value: stats.views_label(), trend: stats.views_trend }
                MetricCard { title: "Taux de conversion", value: stats.conversion_label(), trend: stats.conversion_trend }
            }

            div { class: "muted small", "Prix moyen : {stats.average_price_label()}" }

            div { class: "chart-grid",
                div { class: "card",
                    h3 { class: "card-title", "Évolution des gains" }
                    div { class: "bar-chart",
                        for (day, height) in stats.weekly {
                            div { key: "{day}", class: "bar-column",
                                div { class: "bar", style: "height: {height}%" }
                                span { class: "muted small", "{day}" }
                            }
                        }
                    }
                }
                div { class: "card",
                    h3 { class: "card-title", "Répartition par catégorie" }
                    for category in stats.categories.iter() {
                        div { key: "{category.name}", class: "share-row",
                            div { class: "share-head",
                                span { "{category.name}" }
                                span { class: "muted", "{category.share}%" }
                            }
                            div { class: "share-track",
                                div { class: "share-fill", style: "width: {category.share}%" }
                            }
                        }
                    }
                }
            }

            div { class: "card table-card",
                h3 { class: "card-title", "Ventes récentes" }
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Article" }
                            th { "Prix de vente" }
                            th { "Bénéfice" }
                            th { "Marge" }
                        }
                    }
                    tbody {
                        for sale in stats.recent_sales.iter() {
                            tr { key: "{sale.item}",
                                td { class: "muted", {sale.sold_on.format("%d/%m/%Y").to_string()} }
                                td { class: "item-name", "{sale.item}" }
                                td { "{format_eur(sale.price)}" }
                                td { class: "positive", "+{format_eur(sale.profit)}" }
                                td { "{sale.margin_label()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MetricCard(title: &'static str, value: String, trend: Trend) -> Element {
    let (class, glyph) = if trend.is_up() {
        ("trend up", Glyph::TrendingUp)
    } else {
        ("trend down", Glyph::TrendingDown)
    };

    rsx! {
        div { class: "card metric-card",
            div { class: "muted small", "{title}" }
            div { class: "metric-value", "{value}" }
            div { class: "{class}",
                {icon(glyph, 14)}
                span { "{trend.label()}" }
            }
        }
    }
}
