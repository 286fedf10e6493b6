pub(crate) const CONFIG_GLOBAL: &str = "__TGF_DASHBOARD_CONFIG__";
pub(crate) const STYLE_ELEMENT_ID: &str = "tgforward-dashboard-styles";
pub(crate) const FEEDBACK_CLASS: &str = "invalid-feedback";
pub(crate) const SUGGESTIONS_CLASS: &str = "chat-suggestions";
pub(crate) const CONFIRM_MESSAGE_ATTRIBUTE: &str = "data-confirm";
pub(crate) const INLINE_CLICK_ATTRIBUTE: &str = "onclick";
pub(crate) const BOOTSTRAP_GLOBAL: &str = "bootstrap";
pub(crate) const DASHBOARD_STYLES: &str = r"
    @keyframes slideIn {
        from {
            transform: translateX(100%);
            opacity: 0;
        }
        to {
            transform: translateX(0);
            opacity: 1;
        }
    }

    .toast-notification {
        animation: slideIn 0.3s ease-out;
    }

    .chat-suggestions {
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    }

    .chat-suggestions div:hover {
        background-color: #f8f9fa;
    }

    .chat-suggestions div:last-child {
        border-bottom: none;
    }
";
pub(crate) const TOAST_STYLE: [(&str, &str); 5] = [
    ("position", "fixed"),
    ("top", "20px"),
    ("right", "20px"),
    ("z-index", "9999"),
    ("min-width", "300px"),
];
pub(crate) const SUGGESTION_PANEL_STYLE: [(&str, &str); 10] = [
    ("position", "absolute"),
    ("top", "100%"),
    ("left", "0"),
    ("right", "0"),
    ("background", "white"),
    ("border", "1px solid #ccc"),
    ("border-radius", "4px"),
    ("max-height", "200px"),
    ("overflow-y", "auto"),
    ("z-index", "1000"),
];
pub(crate) const SUGGESTION_ITEM_STYLE: [(&str, &str); 3] = [
    ("padding", "8px 12px"),
    ("cursor", "pointer"),
    ("border-bottom", "1px solid #eee"),
];
