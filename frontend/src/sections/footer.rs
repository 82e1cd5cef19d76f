use yew::prelude::*;

use crate::components::social_icons::SocialLinks;
use crate::components::text::SectionLabel;
use crate::content::{enquiry_mailto, CONTACT};

fn lines(rows: &'static [&'static str]) -> Html {
    html! {
        <p class="contact-lines">
            { for rows.iter().map(|line| html! { <>{ *line }<br /></> }) }
        </p>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let mailto = enquiry_mailto();

    html! {
        <footer id="contact" class="footer dark-section">
            <div class="section-inner">
                <div class="footer-grid">
                    <div>
                        <SectionLabel text="Contact Us" />
                        <h2 class="footer-heading">
                            {"A Space to Begin \u{2014} "}<br />
                            {"Connect with Viyaa."}
                        </h2>
                        <p class="footer-intro">
                            {"Minimal, premium, elemental, eternal. Homes crafted to stand strong beyond trends."}
                        </p>
                        <a href={mailto.clone()} class="enquire-button">
                            {"ENQUIRE NOW "}<span class="arrow">{"\u{2192}"}</span>
                        </a>
                    </div>

                    <div class="contact-grid">
                        <div>
                            <h4 class="contact-heading">{"Location"}</h4>
                            { lines(CONTACT.address_lines) }
                        </div>
                        <div>
                            <h4 class="contact-heading">{"Call Us"}</h4>
                            <p class="contact-lines">
                                <a href={format!("tel:{}", CONTACT.phone.replace(' ', ""))}>{ CONTACT.phone }</a>
                            </p>
                        </div>
                        <div>
                            <h4 class="contact-heading">{"Email"}</h4>
                            <p class="contact-lines">
                                <a href={mailto}>{ CONTACT.email }</a>
                            </p>
                        </div>
                        <div>
                            <h4 class="contact-heading">{"Open Time"}</h4>
                            { lines(CONTACT.hours_lines) }
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{"\u{a9} 2010 AJDA Group Company. All rights reserved."}</p>
                    <SocialLinks />
                </div>

                <div id="partner" class="partner-strip">
                    <h3 class="partner-heading">{"Interested in Partnering?"}</h3>
                    <div class="partner-buttons">
                        <a href={enquiry_mailto()} class="outline-button">{"Channel Partner"}</a>
                        <a href={enquiry_mailto()} class="outline-button">{"Collaborate"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
