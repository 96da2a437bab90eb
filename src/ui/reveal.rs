//! Scroll reveal
//!
//! Elements carrying the `reveal` class start hidden and get `visible` the
//! first time they scroll into view. Each element is unobserved right after,
//! so scrolling back up never hides it again.

use leptos::prelude::*;

/// Class that opts an element into the reveal animation
pub const REVEAL: &str = "reveal";

/// Inline IntersectionObserver bootstrap; render once per page
#[component]
pub fn RevealScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initReveal() {
                    var targets = document.querySelectorAll('.reveal');
                    if (!('IntersectionObserver' in window)) {
                        targets.forEach(function(el) { el.classList.add('visible'); });
                        return;
                    }
                    var observer = new IntersectionObserver(function(entries) {
                        entries.forEach(function(entry) {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    targets.forEach(function(el) { observer.observe(el); });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initReveal);
                } else {
                    initReveal();
                }
            })();
            "#
        </script>
    }
}
