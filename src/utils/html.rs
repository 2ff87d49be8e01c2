//! # HTML Rendering
//!
//! Server-side rendering for the marketing page and for the enquiry email
//! bodies. Everything here is plain string templating; user-supplied input is
//! escaped before it is interpolated into HTML.

use time::OffsetDateTime;

use crate::models::{
    AVAILABILITY_NOTICE, BrandConfig, HIGHLIGHTS, PRICING_BLOCKS, RoomIcon, SERVICE_AREAS,
    SERVICE_OFFERINGS, session_detail,
};
use crate::utils::constant::CONTACT_PHONE;

/// Escapes the five HTML-significant characters in user-supplied text.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Plain-text body of the enquiry email relayed to the operator.
pub fn enquiry_email_text(name: &str, email: &str, mobile: Option<&str>, message: &str) -> String {
    let mobile = mobile.filter(|m| !m.trim().is_empty()).unwrap_or("Not provided");
    format!(
        "New enquiry received from the website:\n\n\
         Name: {name}\n\
         Email: {email}\n\
         Mobile: {mobile}\n\n\
         Message:\n{message}\n"
    )
}

/// HTML alternative body of the enquiry email.
///
/// User input is escaped; newlines in the message become `<br>` so the
/// message reads as written.
pub fn enquiry_email_html(
    name: &str,
    email: &str,
    mobile: Option<&str>,
    message: &str,
    brand: &str,
) -> String {
    let mobile = mobile.filter(|m| !m.trim().is_empty()).unwrap_or("Not provided");
    let message = escape_html(message).replace('\n', "<br>");
    format!(
        r#"<h2>New Enquiry from {brand} Website</h2>
<p><strong>Name:</strong> {name}</p>
<p><strong>Email:</strong> {email}</p>
<p><strong>Mobile:</strong> {mobile}</p>
<h3>Message:</h3>
<p>{message}</p>"#,
        name = escape_html(name),
        email = escape_html(email),
        mobile = escape_html(mobile),
    )
}

fn room_icon_glyph(icon: RoomIcon) -> &'static str {
    match icon {
        RoomIcon::Bed => "🛏",
        RoomIcon::Bath => "🛁",
        RoomIcon::Kitchen => "🍴",
        RoomIcon::Sofa => "🛋",
        RoomIcon::Laundry => "👕",
    }
}

/// Head metadata for the resolved brand.
///
/// This is the single place page metadata is applied; rendering it again for
/// the same brand yields the same bytes.
fn render_meta_tags(config: &BrandConfig) -> String {
    format!(
        r#"<title>{title}</title>
<meta name="description" content="{description}">
<meta name="keywords" content="{keywords}">
<meta property="og:title" content="{title}">
<meta property="og:description" content="{description}">"#,
        title = config.title,
        description = config.description,
        keywords = config.keywords,
    )
}

fn render_services() -> String {
    SERVICE_OFFERINGS
        .iter()
        .map(|service| {
            let features = service
                .features
                .iter()
                .map(|feature| format!("<li><span class=\"tick\">✓</span> {feature}</li>"))
                .collect::<String>();
            format!(
                r#"<article class="service-card">
<div class="service-icon">{icon}</div>
<h3>{title}</h3>
<p>{description}</p>
<ul>{features}</ul>
</article>"#,
                icon = service.icon,
                title = service.title,
                description = service.description,
            )
        })
        .collect()
}

fn render_areas() -> String {
    SERVICE_AREAS
        .iter()
        .map(|area| format!("<li class=\"area\">📍 {area}</li>"))
        .collect()
}

fn render_pricing() -> String {
    PRICING_BLOCKS
        .iter()
        .map(|block| {
            format!(
                r#"<div class="pricing-card" data-session="{label}">
<h3>{label}</h3>
<div class="price">{price}</div>
<p class="per-hour">Equivalent to {per_hour} per Hour</p>
<p class="hint">Click for details</p>
</div>"#,
                label = block.label,
                price = block.price,
                per_hour = block.per_hour,
            )
        })
        .collect()
}

/// One hidden dialog per pricing block, pre-rendered from the fixed detail
/// tables and toggled by the browser script.
fn render_session_dialogs() -> String {
    PRICING_BLOCKS
        .iter()
        .filter_map(|block| session_detail(block.label))
        .map(|detail| {
            let rooms = detail
                .rooms
                .iter()
                .map(|room| {
                    format!(
                        "<li>{glyph} {label}</li>",
                        glyph = room_icon_glyph(room.icon),
                        label = room.label,
                    )
                })
                .collect::<String>();
            format!(
                r#"<dialog class="session-dialog" data-session="{label}">
<h3>{label}</h3>
<p>{description}</p>
<h4>What's typically included:</h4>
<ul>{rooms}</ul>
<p class="hint">Sessions can be customised to your needs. Contact us to discuss your requirements.</p>
<button type="button" class="close-dialog">Close</button>
</dialog>"#,
                label = detail.label,
                description = detail.description,
            )
        })
        .collect()
}

fn render_highlights() -> String {
    HIGHLIGHTS
        .iter()
        .map(|(title, text)| {
            format!(
                r#"<div class="highlight"><h3>{title}</h3><p>{text}</p></div>"#
            )
        })
        .collect()
}

fn render_contact_form(config: &BrandConfig) -> String {
    format!(
        r#"<form id="contact-form" novalidate>
<label for="name">Name</label>
<input id="name" name="name" type="text" placeholder="Your Name" minlength="2" required>
<label for="email">Email</label>
<input id="email" name="email" type="email" placeholder="name@example.com" required>
<label for="mobile">Mobile (Optional)</label>
<input id="mobile" name="mobile" type="tel" placeholder="07123 456789">
<label for="message">Message</label>
<textarea id="message" name="message" placeholder="Tell us about your cleaning needs..." minlength="10" required></textarea>
<label class="human-check"><input id="human-check" type="checkbox"> I confirm I am a real person (not a robot)</label>
<button id="submit-btn" type="submit" disabled>Send Message</button>
</form>
<p class="contact-direct"><a href="mailto:{email}">Email Us Directly</a> · {phone}</p>"#,
        email = config.email,
        phone = CONTACT_PHONE,
    )
}

/// Renders the complete home page for the resolved brand.
pub fn render_home_page(config: &BrandConfig) -> String {
    let year = OffsetDateTime::now_utc().year();
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
{meta}
<link rel="stylesheet" href="/static/styles.css">
</head>
<body>
<nav>
<span class="brand">✦ {brand_name}</span>
<div class="nav-links">
<a href="#services">View Services Offered</a>
<a href="#areas">View Service Areas</a>
<a href="#prices">View Our Prices</a>
<a href="#contact" class="cta">Contact Us</a>
<span class="nav-contact"><a href="tel:{phone_link}">{phone}</a> · <a href="mailto:{email}">{email}</a></span>
</div>
</nav>

<header class="hero">
<h1>Luxury Cleaning <span>At Your Service</span></h1>
<p>Professional home cleaning &amp; in-house ironing. Offering a full premium maid experience
in your home, customised exactly your way. From chocolates on your pillow to in-house ironing,
you set the criteria and we do our best to work around your wishes without worrying about
looking too picky!</p>
<aside class="notice">
<h3>✦ {notice_title}</h3>
<p>{notice_message}</p>
</aside>
</header>

<section id="services">
<h2>Services We Offer</h2>
<p>Spotless homes &amp; in-house Ironing/Laundry, we even cover commercial buildings
(but will skip the chocolates!).</p>
<div class="service-grid">{services}</div>
</section>

<section id="areas">
<h2>Service Areas</h2>
<p>We proudly serve communities across Essex, bringing premium cleaning and laundry
services right to your doorstep.</p>
<ul class="area-grid">{areas}</ul>
<p class="hint">Don't see your area? <a href="mailto:{email}">Contact us</a> - we may still be able to help!</p>
</section>

<section id="prices">
<h2>Our Prices</h2>
<p>Prices are quoted in sessions or blocks of time and are based on regular cleans.
One off cleans and business premises cleans are subject to prior discussion.
These sessions can be used to combine all parts of our services.</p>
<div class="pricing-grid">{pricing}</div>
{session_dialogs}
</section>

<section id="why-us">
<h2>Why Choose {brand_name}?</h2>
<p>Experience the premium difference</p>
<div class="highlight-grid">{highlights}</div>
</section>

<section id="contact">
<h2>Interested in our services?</h2>
<p>Get in touch today via the below form or email link. We'll customize our services to
meet your needs. We will always reply back via Email or Text first unless you request us
to call!</p>
{contact_form}
</section>

<dialog id="success-dialog">
<h3>Thank You!</h3>
<p>Your email has been sent and we will get back to you shortly.</p>
<button type="button" class="close-dialog">Close</button>
</dialog>
<div id="error-toast" hidden></div>

<footer>
<p>Luxury cleaning and laundry services across Essex.</p>
<p>{phone} · {email} · South Benfleet, Essex, United Kingdom</p>
<p>&copy; {year} {brand_name}. All rights reserved.</p>
</footer>

<script src="/static/app.js"></script>
</body>
</html>"##,
        meta = render_meta_tags(config),
        brand_name = config.brand_name,
        email = config.email,
        phone = CONTACT_PHONE,
        phone_link = CONTACT_PHONE.replace(' ', ""),
        notice_title = AVAILABILITY_NOTICE.title,
        notice_message = AVAILABILITY_NOTICE.message,
        services = render_services(),
        areas = render_areas(),
        pricing = render_pricing(),
        session_dialogs = render_session_dialogs(),
        highlights = render_highlights(),
        contact_form = render_contact_form(config),
    )
}
