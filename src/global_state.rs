use crate::domain::page::LOADING_TEXT;
use crate::infrastructure::rendering::TooltipData;
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub price_text: RwSignal<String>,
    pub header_date: RwSignal<String>,
    pub chart_status: RwSignal<Option<String>>,
    pub usd_value: RwSignal<String>,
    pub brl_value: RwSignal<String>,
    pub tooltip_data: RwSignal<Option<TooltipData>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        price_text: create_rw_signal(LOADING_TEXT.to_string()),
        header_date: create_rw_signal(String::new()),
        chart_status: create_rw_signal(None),
        usd_value: create_rw_signal(String::new()),
        brl_value: create_rw_signal(String::new()),
        tooltip_data: create_rw_signal(None),
    })
}

crate::global_signals! {
    pub price_text => price_text: String,
    pub header_date => header_date: String,
    pub chart_status => chart_status: Option<String>,
    pub usd_value => usd_value: String,
    pub brl_value => brl_value: String,
    pub tooltip_data => tooltip_data: Option<TooltipData>,
}
