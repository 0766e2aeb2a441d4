use yew::prelude::*;

const LINK_GROUPS: &[(&str, &[&str])] = &[
    ("Platform", &["Smart Alerts", "Report Auto-Gen", "What-If Simulators", "Market Diagnostics"]),
    ("Solutions", &["Brand Management", "Market Intelligence", "Competitive Analysis", "Performance Tracking"]),
    ("Resources", &["Case Studies", "Documentation", "CPG Insights", "API"]),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <span class="footer-logo">{"clayface"}</span>
                    <p>{"Decision Intelligence Platform for CPG Brand Managers. From insight to impact in minutes, not months."}</p>
                </div>
                { for LINK_GROUPS.iter().map(|(heading, links)| html! {
                    <div key={*heading} class="footer-column">
                        <h4>{*heading}</h4>
                        <ul>
                            { for links.iter().map(|link| html! {
                                <li key={*link}><a href="#">{*link}</a></li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
            <div class="footer-bottom">
                <p>{"© 2024 clayface. All rights reserved."}</p>
                <div class="footer-legal">
                    <a href="#">{"Privacy"}</a>
                    <a href="#">{"Terms"}</a>
                    <a href="#">{"Security"}</a>
                </div>
            </div>
        </footer>
    }
}
