//! Static pieces of the generated documents.
//!
//! Styles and browser-side helpers live here so the renderer only deals with the
//! parts that vary per artifact.

pub const DOCUMENT_OPEN: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
"#;

/// Styles shared by both document kinds, including the light/dark variables.
pub const BASE_STYLES: &str = r#"        :root {
            --bg-color: #ffffff;
            --card-color: #ffffff;
            --text-color: #333333;
            --label-color: #666666;
            --grid-color: #eeeeee;
            --accent-color: #6d28d9;
            --error-color: #dc2626;
        }
        body.dark {
            --bg-color: #1e1e1e;
            --card-color: #262626;
            --text-color: #f0f0f0;
            --label-color: #bbbbbb;
            --grid-color: #333333;
        }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
            line-height: 1.6;
            color: var(--text-color);
            background-color: var(--bg-color);
            transition: background-color 0.3s, color 0.3s;
            margin: 0;
            padding: 0;
        }
        .header { position: fixed; top: 0; left: 0; right: 0; background-color: var(--bg-color); box-shadow: 0 2px 5px rgba(0,0,0,0.1); padding: 15px 20px; display: flex; justify-content: space-between; align-items: center; z-index: 100; }
        .header h1 { margin: 0; font-size: 1.5rem; }
        .version { color: var(--label-color); font-size: 0.9em; margin-left: 10px; }
        .theme-toggle { display: flex; align-items: center; }
        .theme-toggle-label { margin-right: 8px; color: var(--label-color); }
        .switch { position: relative; display: inline-block; width: 50px; height: 24px; }
        .switch input { opacity: 0; width: 0; height: 0; }
        .slider { position: absolute; cursor: pointer; inset: 0; background-color: #ccc; transition: .4s; border-radius: 24px; }
        .slider:before { position: absolute; content: ""; height: 16px; width: 16px; left: 4px; bottom: 4px; background-color: white; transition: .4s; border-radius: 50%; }
        input:checked + .slider { background-color: var(--accent-color); }
        input:focus + .slider { box-shadow: 0 0 1px var(--accent-color); }
        input:checked + .slider:before { transform: translateX(26px); }
        .container { max-width: 1200px; margin: 70px auto 20px; padding: 20px; }
        .no-results { padding: 2rem; text-align: center; color: var(--label-color); }
        .render-error { color: var(--error-color); padding: 20px; border: 1px solid var(--error-color); border-radius: 8px; margin-bottom: 20px; }
        .render-error pre { white-space: pre-wrap; margin: 0; }
"#;

pub const MARKUP_STYLES: &str = r"        .svg-container { max-width: 720px; margin: 20px auto; padding: 15px; border-radius: 8px; background-color: var(--card-color); box-shadow: 0 1px 3px rgba(0,0,0,0.1); break-inside: avoid; }
        .svg-container svg { max-width: 100%; height: auto; }
";

pub const CHART_STYLES: &str = r"        .chart-container { background-color: var(--card-color); border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); padding: 15px; margin-bottom: 20px; break-inside: avoid; }
        .chart-container h2 { margin-top: 0; font-size: 1.2rem; }
        .chart-canvas { position: relative; height: 360px; }
";

pub const PRINT_STYLES: &str = r"        @media print {
            .header { position: static; box-shadow: none; border-bottom: 1px solid #eee; }
            .theme-toggle { display: none; }
            .container { margin-top: 20px; }
            .svg-container, .chart-container { box-shadow: none; border: 1px solid #eee; }
        }
";

pub const THEME_TOGGLE: &str = r#"        <div class="theme-toggle">
            <span class="theme-toggle-label">Dark Mode</span>
            <label class="switch">
                <input type="checkbox" id="theme-toggle">
                <span class="slider"></span>
            </label>
        </div>
"#;

/// Browser-side chart helpers. Every chart goes through `createBarChart`,
/// `createLineChart`, or `createPieChart`, and failures through `showChartError`.
pub const CHART_HELPERS: &str = r"        const chartContainer = document.getElementById('chart-container');

        window.showChartError = function(title, error) {
            const panel = document.createElement('div');
            panel.className = 'render-error';
            const heading = document.createElement('h2');
            heading.textContent = 'Could not render ' + (title || 'chart');
            const detail = document.createElement('pre');
            detail.textContent = String(error);
            panel.appendChild(heading);
            panel.appendChild(detail);
            chartContainer.appendChild(panel);
        };

        if (typeof Chart !== 'undefined' && typeof ChartDataLabels !== 'undefined') {
            Chart.register(ChartDataLabels);
        }

        function themeColor(name) {
            return getComputedStyle(document.body).getPropertyValue(name).trim();
        }

        const defaultChartOptions = {
            responsive: true,
            maintainAspectRatio: false,
            plugins: {
                datalabels: {
                    color: () => themeColor('--label-color'),
                    font: { weight: 'bold' },
                    formatter: (value) => value
                },
                legend: { labels: { color: () => themeColor('--label-color') } }
            },
            scales: {
                x: { grid: { display: false }, ticks: { color: () => themeColor('--label-color') } },
                y: { grid: { color: () => themeColor('--grid-color') }, ticks: { color: () => themeColor('--label-color') }, grace: '10%' }
            }
        };

        function createChartPanel(title) {
            const panel = document.createElement('div');
            panel.className = 'chart-container';
            if (title) {
                const heading = document.createElement('h2');
                heading.textContent = title;
                panel.appendChild(heading);
            }
            const holder = document.createElement('div');
            holder.className = 'chart-canvas';
            const canvas = document.createElement('canvas');
            holder.appendChild(canvas);
            panel.appendChild(holder);
            chartContainer.appendChild(panel);
            return canvas;
        }

        function mergeOptions(extra) {
            return {
                ...defaultChartOptions,
                plugins: { ...defaultChartOptions.plugins, ...extra.plugins },
                scales: extra.scales === undefined ? defaultChartOptions.scales : extra.scales
            };
        }

        function createChart(type, title, data, extra) {
            const chart = new Chart(createChartPanel(title), { type, data, options: mergeOptions(extra) });
            window.charts.push(chart);
            return chart;
        }

        window.charts = [];

        window.createBarChart = function(title, data) {
            return createChart('bar', title, data, {
                plugins: { datalabels: { ...defaultChartOptions.plugins.datalabels, anchor: 'end', align: 'top' } }
            });
        };

        window.createLineChart = function(title, data) {
            return createChart('line', title, data, {});
        };

        window.createPieChart = function(title, data) {
            return createChart('pie', title, data, {
                scales: {},
                plugins: {
                    datalabels: {
                        ...defaultChartOptions.plugins.datalabels,
                        formatter: (value, context) => {
                            const total = context.dataset.data.reduce((a, b) => a + b, 0);
                            const label = context.chart.data.labels[context.dataIndex];
                            return total ? label + ': ' + Math.round((value / total) * 100) + '%' : label;
                        }
                    }
                }
            });
        };

        function updateChartsTheme() {
            for (const chart of window.charts) {
                chart.update();
            }
        }
";
