use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-card">
                <h2>"İletişim"</h2>
                <p><strong>"Adres: "</strong>"Fırın Sokak No:1, İstanbul"</p>
                <p>
                    <strong>"Telefon: "</strong>
                    <a href="tel:+902120000000">"+90 212 000 00 00"</a>
                </p>
                <p><strong>"Çalışma Saatleri: "</strong>"07:00–23:00"</p>
            </div>
            <div class="hero-card">
                <h3>"Toplu Sipariş"</h3>
                <p>"WhatsApp'tan yazın, aynı gün dönüş yapalım."</p>
                <a class="btn" href="https://wa.me/902120000000" target="_blank">"WhatsApp"</a>
            </div>
        </section>
    }
}
