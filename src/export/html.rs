//! Self-contained HTML document generation

use crate::engine::{start, DisplayMode, DEFAULT_COMPLETION_MESSAGE, NOT_CONFIGURED_MESSAGE};
use crate::markup;
use crate::survey::{Align, SurveyGraph, ThemeConfig};

/// Marker preceding the embedded graph literal. Kept stable so tooling
/// (and the fidelity tests) can locate the inert data inside a document.
pub const QUESTIONS_MARKER: &str = "const QUESTIONS = ";

/// Which variant of the standalone document to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    /// Playback only: the smallest possible document.
    Simple,
    /// Playback plus an embedded question/theme editor, JSON re-export,
    /// and a playback-only HTML re-export of the edited copy.
    Editable,
}

impl ExportMode {
    pub fn is_editable(self) -> bool {
        matches!(self, ExportMode::Editable)
    }
}

/// Produce a standalone HTML document replaying the graph with the same
/// traversal behavior as the interactive engine.
///
/// The document embeds a deep copy of the graph, so later edits to the
/// source survey never affect an exported file. The initial view is
/// pre-rendered into the page and then kept up to date by the embedded
/// runtime on every answer.
pub fn export_html(graph: &SurveyGraph, theme: &ThemeConfig, mode: ExportMode) -> String {
    let questions_json =
        serde_json::to_string(graph.questions()).unwrap_or_else(|_| "[]".to_string());

    let (settings_panel, settings_toggle, editor_js) = if mode.is_editable() {
        (
            settings_panel_html(theme),
            r#"<button class="settings-toggle" onclick="toggleSettings()" title="Settings">&#9881;</button>"#
                .to_string(),
            EDITOR_JS.to_string(),
        )
    } else {
        (String::new(), String::new(), String::new())
    };

    PAGE_TEMPLATE
        .replace("__TF_TITLE__", &markup::escape_html(&theme.survey_title))
        .replace("__TF_FONT__", &theme.font_family)
        .replace("__TF_BG__", &theme.bg_color)
        .replace("__TF_CARD__", &theme.card_bg_color)
        .replace("__TF_PRIMARY__", &theme.primary_btn_color)
        .replace("__TF_SECONDARY__", &theme.secondary_btn_color)
        .replace("__TF_TEXT__", &theme.text_color)
        .replace("__TF_SIZE__", &theme.font_size_px().to_string())
        .replace("__TF_SETTINGS_TOGGLE__", &settings_toggle)
        .replace("__TF_SETTINGS_PANEL__", &settings_panel)
        .replace("__TF_INITIAL_VIEW__", &initial_view_html(graph))
        .replace("__TF_QUESTIONS_JSON__", &questions_json)
        .replace("__TF_DEFAULT_MESSAGE__", &js_string(DEFAULT_COMPLETION_MESSAGE))
        .replace("__TF_NOT_CONFIGURED__", &js_string(NOT_CONFIGURED_MESSAGE))
        .replace("__TF_EDITOR_JS__", &editor_js)
}

/// The initial `#app` contents, derived from the same display-mode rules
/// as the interactive player so the page is meaningful before (or without)
/// the script running.
fn initial_view_html(graph: &SurveyGraph) -> String {
    let state = start(graph);
    match DisplayMode::of(graph, &state) {
        DisplayMode::Prompt(q) => format!(
            concat!(
                r#"<div class="question-container"><div class="text-{align}">"#,
                r#"<div class="question-text">{text}</div></div>"#,
                r#"<div class="buttons">"#,
                r#"<button class="btn-primary" onclick="handleAnswer('yes')">Yes</button>"#,
                r#"<button class="btn-secondary" onclick="handleAnswer('no')">No</button>"#,
                r#"</div></div>"#,
            ),
            align = align_class(q.text_align),
            text = markup::to_html(&q.text),
        ),
        DisplayMode::Completion(q) => completion_html(&markup::to_html(&q.text), q.text_align),
        DisplayMode::Final { message, align } => completion_html(&markup::to_html(message), align),
        DisplayMode::NotConfigured => format!(
            r#"<div class="final-message"><div class="message-text">{}</div></div>"#,
            markup::escape_html(NOT_CONFIGURED_MESSAGE),
        ),
    }
}

fn completion_html(message_html: &str, align: Align) -> String {
    format!(
        concat!(
            r#"<div class="final-message"><div class="icon-check">&#10003;</div>"#,
            r#"<div class="text-{align}"><div class="message-text">{message}</div></div>"#,
            r#"<button class="btn-secondary" onclick="restart()">Take the survey again</button>"#,
            r#"</div>"#,
        ),
        align = align_class(align),
        message = message_html,
    )
}

fn align_class(align: Align) -> &'static str {
    match align {
        Align::Left => "left",
        Align::Center => "center",
    }
}

/// Encode a Rust string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

fn settings_panel_html(theme: &ThemeConfig) -> String {
    SETTINGS_PANEL_TEMPLATE
        .replace(
            "__TF_TITLE_VALUE__",
            &markup::escape_html(&theme.survey_title),
        )
        .replace("__TF_BG__", &theme.bg_color)
        .replace("__TF_CARD__", &theme.card_bg_color)
        .replace("__TF_TEXT__", &theme.text_color)
        .replace("__TF_SIZE__", &theme.font_size_px().to_string())
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>__TF_TITLE__</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: __TF_FONT__, -apple-system, sans-serif;
            background: linear-gradient(135deg, #f8fafc 0%, __TF_BG__ 100%);
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 20px;
        }
        .container { max-width: 800px; width: 100%; }
        .header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 32px; animation: fadeIn 0.6s ease-out; }
        h1 { font-size: 20px; font-weight: bold; color: __TF_TEXT__; line-height: 1.4; }
        .card { background: __TF_CARD__; padding: 48px; border-radius: 12px; box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1); animation: slideUp 0.6s ease-out; }
        .question-container { display: flex; flex-direction: column; gap: 32px; }
        .question-text { font-size: __TF_SIZE__px; font-weight: 600; color: __TF_TEXT__; line-height: 1.6; white-space: pre-wrap; }
        .text-left { text-align: left; }
        .text-center { text-align: center; }
        .buttons { display: flex; gap: 16px; justify-content: center; }
        button { min-width: 128px; padding: 12px 24px; font-size: 18px; font-weight: 500; border-radius: 8px; border: none; cursor: pointer; transition: all 0.2s; }
        .btn-primary { background: __TF_PRIMARY__; color: white; }
        .btn-primary:hover { opacity: 0.9; transform: scale(1.05); }
        .btn-secondary { background: __TF_SECONDARY__; color: __TF_TEXT__; border: 2px solid #e2e8f0; }
        .btn-secondary:hover { opacity: 0.9; transform: scale(1.05); }
        .settings-toggle { min-width: 0; padding: 8px 14px; border-radius: 50%; background: __TF_CARD__; border: 2px solid #e2e8f0; color: __TF_TEXT__; }
        .final-message { display: flex; flex-direction: column; gap: 24px; align-items: center; animation: fadeIn 0.6s ease-out; }
        .icon-check {
            width: 64px;
            height: 64px;
            background: __TF_PRIMARY__1a;
            border-radius: 50%;
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 32px;
            color: __TF_PRIMARY__;
        }
        .message-text { font-size: __TF_SIZE__px; font-weight: 600; color: __TF_TEXT__; white-space: pre-wrap; }
        strong { font-weight: bold; }
        em { font-style: italic; }
        u { text-decoration: underline; }
        .settings { background: white; padding: 20px; border-radius: 8px; margin-bottom: 20px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); max-height: 80vh; overflow-y: auto; }
        .settings h3 { margin-bottom: 15px; }
        .settings h4 { margin-bottom: 10px; }
        .settings-section { margin-bottom: 20px; padding: 15px; background: #f8fafc; border-radius: 8px; }
        .settings label { display: block; margin-bottom: 5px; font-weight: 500; }
        .settings input, .settings select, .settings textarea { width: 100%; padding: 8px; border: 1px solid #e2e8f0; border-radius: 4px; margin-bottom: 10px; }
        .settings input[type="color"] { height: 40px; padding: 2px; }
        .settings .row { display: grid; grid-template-columns: 1fr 1fr; gap: 10px; }
        .settings .actions { display: flex; gap: 8px; }
        .settings .actions button, .settings .wide { min-width: 0; padding: 8px 16px; font-size: 14px; border-radius: 4px; color: white; }
        .settings .wide { width: 100%; margin-bottom: 8px; }
        .q-item { padding: 12px; margin: 8px 0; border: 1px solid #e2e8f0; border-radius: 4px; background: white; display: flex; justify-content: space-between; align-items: start; gap: 8px; }
        .q-item .meta { font-size: 12px; color: #6b7280; margin-top: 4px; }
        .q-item button { min-width: 0; padding: 6px 10px; font-size: 14px; border-radius: 4px; color: white; }
        @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
        @keyframes slideUp { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
        @media (max-width: 768px) {
            h1 { font-size: 16px; }
            .card { padding: 32px 24px; }
            .question-text { font-size: 24px; }
            .message-text { font-size: 20px; }
            .buttons { flex-direction: column; }
            button { width: 100%; }
        }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1 id="survey-title">__TF_TITLE__</h1>
            __TF_SETTINGS_TOGGLE__
        </div>
        __TF_SETTINGS_PANEL__
        <div class="card">
            <div id="app">__TF_INITIAL_VIEW__</div>
        </div>
    </div>

    <script>
        const QUESTIONS = __TF_QUESTIONS_JSON__;
        const DEFAULT_MESSAGE = __TF_DEFAULT_MESSAGE__;
        const NOT_CONFIGURED = __TF_NOT_CONFIGURED__;

        let questions = QUESTIONS.map(function (q) { return Object.assign({}, q); });
        let currentQuestionId = questions.length > 0 ? questions[0].id : null;
        let finalMessage = '';
        let finalMessageAlign = 'center';

        function formatText(text) {
            return text
                .replace(/&/g, '&amp;')
                .replace(/</g, '&lt;')
                .replace(/>/g, '&gt;')
                .replace(/\*\*([\s\S]*?)\*\*/g, '<strong>$1</strong>')
                .replace(/__([\s\S]*?)__/g, '<u>$1</u>')
                .replace(/\*([\s\S]*?)\*/g, '<em>$1</em>');
        }

        function completionView(html, align) {
            return '<div class="final-message"><div class="icon-check">&#10003;</div>' +
                '<div class="text-' + align + '"><div class="message-text">' + html + '</div></div>' +
                '<button class="btn-secondary" onclick="restart()">Take the survey again</button></div>';
        }

        function render() {
            const app = document.getElementById('app');
            const current = questions.find(function (q) { return q.id === currentQuestionId; });

            if (current) {
                const align = current.textAlign || 'center';
                const formatted = formatText(current.text);
                if (!current.yesNextId && !current.noNextId) {
                    app.innerHTML = completionView(formatted, align);
                } else {
                    app.innerHTML = '<div class="question-container"><div class="text-' + align + '">' +
                        '<div class="question-text">' + formatted + '</div></div>' +
                        '<div class="buttons">' +
                        '<button class="btn-primary" onclick="handleAnswer(\'yes\')">Yes</button>' +
                        '<button class="btn-secondary" onclick="handleAnswer(\'no\')">No</button>' +
                        '</div></div>';
                }
            } else if (finalMessage) {
                app.innerHTML = completionView(formatText(finalMessage), finalMessageAlign);
            } else {
                app.innerHTML = '<div class="final-message"><div class="message-text">' +
                    formatText(NOT_CONFIGURED) + '</div></div>';
            }
        }

        function handleAnswer(answer) {
            const current = questions.find(function (q) { return q.id === currentQuestionId; });
            if (!current) return;

            const nextId = answer === 'yes' ? current.yesNextId : current.noNextId;
            const message = answer === 'yes' ? current.yesMessage : current.noMessage;
            const messageAlign = answer === 'yes' ? current.yesMessageAlign : current.noMessageAlign;

            if (nextId) {
                currentQuestionId = nextId;
                finalMessage = '';
            } else if (message) {
                finalMessage = message;
                finalMessageAlign = messageAlign || 'center';
                currentQuestionId = null;
            } else {
                finalMessage = DEFAULT_MESSAGE;
                finalMessageAlign = 'center';
                currentQuestionId = null;
            }

            render();
        }

        function restart() {
            if (questions.length > 0) {
                currentQuestionId = questions[0].id;
                finalMessage = '';
                render();
            }
        }
__TF_EDITOR_JS__
        render();
    </script>
</body>
</html>
"##;

const SETTINGS_PANEL_TEMPLATE: &str = r##"<div id="settings" class="settings" style="display: none;">
            <h3>Survey settings</h3>

            <div class="settings-section">
                <h4>Edit question</h4>
                <label for="edit-text">Question text (use **bold**, *italic*, __underline__):</label>
                <textarea id="edit-text" rows="3"></textarea>
                <label for="text-align">Question text alignment:</label>
                <select id="text-align">
                    <option value="center">Center</option>
                    <option value="left">Left</option>
                </select>
                <div class="row">
                    <div>
                        <label for="yes-next">Next question (Yes):</label>
                        <select id="yes-next"><option value="none">None</option></select>
                    </div>
                    <div>
                        <label for="no-next">Next question (No):</label>
                        <select id="no-next"><option value="none">None</option></select>
                    </div>
                </div>
                <label for="yes-message">Final message (Yes):</label>
                <textarea id="yes-message" rows="2"></textarea>
                <label for="yes-message-align">Message alignment (Yes):</label>
                <select id="yes-message-align">
                    <option value="center">Center</option>
                    <option value="left">Left</option>
                </select>
                <label for="no-message">Final message (No):</label>
                <textarea id="no-message" rows="2"></textarea>
                <label for="no-message-align">Message alignment (No):</label>
                <select id="no-message-align">
                    <option value="center">Center</option>
                    <option value="left">Left</option>
                </select>
                <div class="actions">
                    <button onclick="saveQuestion()" style="background: #3b82f6;">Save question</button>
                    <button onclick="addQuestion()" style="background: #10b981;">Add question</button>
                    <button onclick="cancelEdit()" style="background: #6b7280;">Cancel</button>
                </div>
            </div>

            <div class="settings-section">
                <h4>All questions</h4>
                <div id="questions-list"></div>
            </div>

            <div class="settings-section">
                <h4>Theme</h4>
                <label for="survey-title-input">Survey title:</label>
                <input type="text" id="survey-title-input" value="__TF_TITLE_VALUE__">
                <div class="row">
                    <div>
                        <label for="bg-color">Background color:</label>
                        <input type="color" id="bg-color" value="__TF_BG__">
                    </div>
                    <div>
                        <label for="card-color">Card color:</label>
                        <input type="color" id="card-color" value="__TF_CARD__">
                    </div>
                    <div>
                        <label for="text-color">Text color:</label>
                        <input type="color" id="text-color" value="__TF_TEXT__">
                    </div>
                    <div>
                        <label for="font-family">Font:</label>
                        <select id="font-family">
                            <option value="system-ui">System UI</option>
                            <option value="Arial">Arial</option>
                            <option value="Georgia">Georgia</option>
                            <option value="Times New Roman">Times New Roman</option>
                            <option value="Courier New">Courier New</option>
                        </select>
                    </div>
                </div>
                <label for="font-size">Font size (px):</label>
                <input type="number" id="font-size" value="__TF_SIZE__" min="16" max="48">
                <button class="wide" onclick="applyTheme()" style="background: #f59e0b;">Apply theme</button>
                <button class="wide" onclick="exportSimpleHtml()" style="background: #8b5cf6;">Export playable HTML</button>
                <button class="wide" onclick="exportData()" style="background: #6366f1;">Export JSON</button>
            </div>
        </div>"##;

const EDITOR_JS: &str = r##"
        let editingId = null;

        function toggleSettings() {
            const settings = document.getElementById('settings');
            settings.style.display = settings.style.display === 'none' ? 'block' : 'none';
            if (settings.style.display === 'block') renderQuestionsList();
        }

        function branchSummary(nextId, message) {
            return nextId ? 'question' : (message ? 'message' : 'end');
        }

        function renderQuestionsList() {
            const list = document.getElementById('questions-list');
            if (questions.length === 0) {
                list.innerHTML = '<p style="color: #6b7280;">No questions. Add the first one.</p>';
                updateQuestionSelects();
                return;
            }
            list.innerHTML = questions.map(function (q, i) {
                const preview = q.text.length > 60 ? q.text.substring(0, 60) + '...' : q.text;
                return '<div class="q-item"><div style="flex: 1;">' +
                    '<strong>' + (i + 1) + '.</strong> ' + formatText(preview) +
                    '<div class="meta">Yes &rarr; ' + branchSummary(q.yesNextId, q.yesMessage) +
                    ' | No &rarr; ' + branchSummary(q.noNextId, q.noMessage) + '</div></div>' +
                    '<div style="display: flex; gap: 4px;">' +
                    '<button onclick="editQuestion(\'' + q.id + '\')" style="background: #3b82f6;">Edit</button>' +
                    '<button onclick="deleteQuestion(\'' + q.id + '\')" style="background: #ef4444;">Delete</button>' +
                    '</div></div>';
            }).join('');
            updateQuestionSelects();
        }

        function updateQuestionSelects() {
            const yesNext = document.getElementById('yes-next');
            const noNext = document.getElementById('no-next');
            const options = '<option value="none">None</option>' +
                questions.filter(function (q) { return q.id !== editingId; }).map(function (q) {
                    const preview = q.text.length > 30 ? q.text.substring(0, 30) + '...' : q.text;
                    return '<option value="' + q.id + '">' + formatText(preview) + '</option>';
                }).join('');
            yesNext.innerHTML = options;
            noNext.innerHTML = options;
        }

        function editQuestion(id) {
            const q = questions.find(function (x) { return x.id === id; });
            if (!q) return;
            editingId = id;
            document.getElementById('edit-text').value = q.text;
            document.getElementById('text-align').value = q.textAlign || 'center';
            document.getElementById('yes-message').value = q.yesMessage || '';
            document.getElementById('no-message').value = q.noMessage || '';
            document.getElementById('yes-message-align').value = q.yesMessageAlign || 'center';
            document.getElementById('no-message-align').value = q.noMessageAlign || 'center';
            updateQuestionSelects();
            document.getElementById('yes-next').value = q.yesNextId || 'none';
            document.getElementById('no-next').value = q.noNextId || 'none';
        }

        function cancelEdit() {
            editingId = null;
            document.getElementById('edit-text').value = '';
            document.getElementById('text-align').value = 'center';
            document.getElementById('yes-next').value = 'none';
            document.getElementById('no-next').value = 'none';
            document.getElementById('yes-message').value = '';
            document.getElementById('no-message').value = '';
            document.getElementById('yes-message-align').value = 'center';
            document.getElementById('no-message-align').value = 'center';
        }

        function readForm() {
            const text = document.getElementById('edit-text').value;
            if (!text.trim()) {
                alert('Enter the question text');
                return null;
            }
            const yesNextId = document.getElementById('yes-next').value;
            const noNextId = document.getElementById('no-next').value;
            return {
                text: text,
                textAlign: document.getElementById('text-align').value,
                yesNextId: yesNextId === 'none' ? null : yesNextId,
                noNextId: noNextId === 'none' ? null : noNextId,
                yesMessage: document.getElementById('yes-message').value,
                noMessage: document.getElementById('no-message').value,
                yesMessageAlign: document.getElementById('yes-message-align').value,
                noMessageAlign: document.getElementById('no-message-align').value
            };
        }

        function saveQuestion() {
            const fields = readForm();
            if (!fields) return;
            if (editingId) {
                questions = questions.map(function (q) {
                    return q.id === editingId ? Object.assign({}, q, fields) : q;
                });
                editingId = null;
            }
            cancelEdit();
            renderQuestionsList();
            render();
        }

        function freshId() {
            let id = Date.now().toString();
            while (questions.some(function (q) { return q.id === id; })) {
                id = (parseInt(id, 10) + 1).toString();
            }
            return id;
        }

        function addQuestion() {
            const fields = readForm();
            if (!fields) return;
            questions.push(Object.assign({ id: freshId() }, fields));
            cancelEdit();
            renderQuestionsList();
            render();
        }

        function deleteQuestion(id) {
            if (!confirm('Delete this question?')) return;
            questions = questions.filter(function (q) { return q.id !== id; });
            renderQuestionsList();
            if (currentQuestionId === id) restart(); else render();
        }

        function downloadFile(content, filename, type) {
            const blob = new Blob([content], { type: type });
            const url = URL.createObjectURL(blob);
            const a = document.createElement('a');
            a.href = url;
            a.download = filename;
            a.click();
            URL.revokeObjectURL(url);
        }

        function exportData() {
            downloadFile(JSON.stringify(questions, null, 2), 'survey-questions.json', 'application/json');
        }

        function exportSimpleHtml() {
            const runtime = [
                'const QUESTIONS = ' + JSON.stringify(questions) + ';',
                'const DEFAULT_MESSAGE = ' + JSON.stringify(DEFAULT_MESSAGE) + ';',
                'const NOT_CONFIGURED = ' + JSON.stringify(NOT_CONFIGURED) + ';',
                'let questions = QUESTIONS.map(function (q) { return Object.assign({}, q); });',
                'let currentQuestionId = questions.length > 0 ? questions[0].id : null;',
                "let finalMessage = '';",
                "let finalMessageAlign = 'center';",
                formatText.toString(),
                completionView.toString(),
                render.toString(),
                handleAnswer.toString(),
                restart.toString(),
                'render();'
            ].join('\n');

            const clone = document.documentElement.cloneNode(true);
            const panel = clone.querySelector('#settings');
            if (panel) panel.remove();
            const toggle = clone.querySelector('.settings-toggle');
            if (toggle) toggle.remove();
            clone.querySelector('script').textContent = runtime;
            downloadFile('<!DOCTYPE html>\n' + clone.outerHTML, 'survey.html', 'text/html');
        }

        function applyTheme() {
            const title = document.getElementById('survey-title-input').value;
            const bg = document.getElementById('bg-color').value;
            const card = document.getElementById('card-color').value;
            const text = document.getElementById('text-color').value;
            const font = document.getElementById('font-family').value;
            const size = document.getElementById('font-size').value;

            document.getElementById('survey-title').textContent = title;
            document.body.style.background = 'linear-gradient(135deg, #f8fafc 0%, ' + bg + ' 100%)';
            document.body.style.fontFamily = font + ', -apple-system, sans-serif';
            document.querySelector('.card').style.background = card;
            document.querySelectorAll('.question-text, .message-text').forEach(function (el) {
                el.style.color = text;
                el.style.fontSize = size + 'px';
            });
            document.querySelector('h1').style.color = text;
        }
"##;
