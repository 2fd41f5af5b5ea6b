//! QR code rendered as inline SVG.

use qrcode::QrCode;
use qrcode::render::svg;
use yew::prelude::*;

/// Renders `data` as an SVG document at least `size` pixels wide.
pub fn qr_svg(data: &str, size: u32) -> Result<String, qrcode::types::QrError> {
    let code = QrCode::new(data.as_bytes())?;
    Ok(code
        .render::<svg::Color<'_>>()
        .min_dimensions(size, size)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .quiet_zone(false)
        .build())
}

#[derive(Properties, PartialEq)]
pub struct QrGlyphProps {
    pub value: AttrValue,
    #[prop_or(96)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// QR code for `value`, regenerated only when the value or size changes.
#[function_component(QrGlyph)]
pub fn qr_glyph(props: &QrGlyphProps) -> Html {
    let svg = use_memo((props.value.clone(), props.size), |(value, size)| {
        qr_svg(value, *size).map_err(|e| {
            tracing::warn!("Could not encode QR code for {value}: {e}");
        })
    });

    let class = classes!("qr-glyph", props.class.clone());
    match &*svg {
        Ok(svg) => html! {
            <div {class}>{ Html::from_html_unchecked(AttrValue::from(svg.clone())) }</div>
        },
        Err(()) => html! {
            <div {class}><span class="qr-glyph-error">{ "QR" }</span></div>
        },
    }
}
