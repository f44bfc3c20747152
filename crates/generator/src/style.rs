//! Inline stylesheets. Pages are self-contained, so each document embeds
//! its CSS in a `<style>` block.

/// Stylesheet for an individual location page
pub const LOCATION_PAGE_CSS: &str = r#"        :root {
            --primary: #f59e0b;
            --dark: #111827;
            --light: #f9fafb;
            --text: #374151;
        }
        * { margin: 0; padding: 0; box-sizing: border-box; }
        html, body { max-width: 100%; overflow-x: hidden; }
        body {
            font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: var(--text);
            background: var(--light);
        }
        .container { max-width: 1200px; margin: 0 auto; padding: 0 20px; }

        /* Header */
        header {
            background: var(--dark);
            color: white;
            padding: 15px 0;
        }
        .header-content {
            display: flex;
            justify-content: space-between;
            align-items: center;
            flex-wrap: wrap;
            gap: 15px;
        }
        .logo { font-size: 1.5rem; font-weight: 700; color: var(--primary); text-decoration: none; }
        .phone-cta {
            background: var(--primary);
            color: var(--dark);
            padding: 12px 24px;
            text-decoration: none;
            font-weight: 700;
            border-radius: 5px;
        }
        .phone-cta:hover { background: #d97706; }

        /* Hero */
        .hero {
            background: linear-gradient(135deg, var(--dark) 0%, #1f2937 100%);
            color: white;
            padding: 80px 0;
            text-align: center;
        }
        .hero h1 {
            font-size: 2.5rem;
            margin-bottom: 20px;
            line-height: 1.2;
        }
        .hero h1 span { color: var(--primary); }
        .hero p {
            font-size: 1.25rem;
            max-width: 700px;
            margin: 0 auto 30px;
            opacity: 0.9;
        }
        .cta-btn {
            display: inline-block;
            background: var(--primary);
            color: var(--dark);
            padding: 15px 40px;
            text-decoration: none;
            font-weight: 700;
            font-size: 1.1rem;
            border-radius: 5px;
            transition: transform 0.2s;
        }
        .cta-btn:hover { transform: scale(1.05); background: #d97706; }

        /* Services Section */
        .services {
            padding: 80px 0;
            background: white;
        }
        .section-title {
            text-align: center;
            font-size: 2rem;
            margin-bottom: 50px;
            color: var(--dark);
        }
        .services-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
            gap: 30px;
        }
        .service-card {
            background: var(--light);
            padding: 30px;
            border-radius: 10px;
            text-align: center;
            border: 2px solid transparent;
            transition: all 0.3s;
        }
        .service-card:hover {
            border-color: var(--primary);
            transform: translateY(-5px);
        }
        .service-card h3 {
            color: var(--dark);
            margin-bottom: 10px;
        }

        /* About Section */
        .about {
            padding: 80px 0;
            background: var(--dark);
            color: white;
        }
        .about-content {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 50px;
            align-items: center;
        }
        .about h2 {
            font-size: 2rem;
            margin-bottom: 20px;
            color: var(--primary);
        }
        .about ul {
            list-style: none;
            margin-top: 20px;
        }
        .about li {
            padding: 10px 0;
            padding-left: 30px;
            position: relative;
        }
        .about li:before {
            content: "✓";
            color: var(--primary);
            position: absolute;
            left: 0;
            font-weight: bold;
        }

        /* Areas Section */
        .areas {
            padding: 80px 0;
            background: white;
        }
        .areas-list {
            display: flex;
            flex-wrap: wrap;
            gap: 15px;
            justify-content: center;
            margin-top: 30px;
        }
        .areas-list a {
            background: var(--light);
            color: var(--dark);
            padding: 10px 20px;
            text-decoration: none;
            border-radius: 5px;
            border: 1px solid #e5e7eb;
            transition: all 0.2s;
        }
        .areas-list a:hover {
            background: var(--primary);
            color: var(--dark);
            border-color: var(--primary);
        }

        /* CTA Section */
        .cta-section {
            padding: 80px 0;
            background: var(--primary);
            text-align: center;
        }
        .cta-section h2 {
            font-size: 2rem;
            color: var(--dark);
            margin-bottom: 20px;
        }
        .cta-section p {
            font-size: 1.25rem;
            color: var(--dark);
            margin-bottom: 30px;
        }
        .cta-section .cta-btn {
            background: var(--dark);
            color: white;
        }
        .cta-section .cta-btn:hover { background: #374151; }

        /* Footer */
        footer {
            background: var(--dark);
            color: white;
            padding: 40px 0 20px;
        }
        .footer-content {
            display: flex;
            justify-content: space-between;
            flex-wrap: wrap;
            gap: 30px;
            margin-bottom: 30px;
        }
        .footer-section h4 {
            color: var(--primary);
            margin-bottom: 15px;
        }
        .footer-section a {
            color: #9ca3af;
            text-decoration: none;
            display: block;
            padding: 5px 0;
        }
        .footer-section a:hover { color: var(--primary); }
        .footer-bottom {
            text-align: center;
            padding-top: 20px;
            border-top: 1px solid #374151;
            color: #9ca3af;
        }

        @media (max-width: 768px) {
            .hero h1 { font-size: 1.8rem; }
            .about-content { grid-template-columns: 1fr; }
            .header-content { justify-content: center; text-align: center; }
        }
"#;

/// Stylesheet for the locations index
pub const LOCATIONS_INDEX_CSS: &str = r#"        :root {
            --primary: #f59e0b;
            --dark: #111827;
            --light: #f9fafb;
            --text: #374151;
        }
        * { margin: 0; padding: 0; box-sizing: border-box; }
        html, body { max-width: 100%; overflow-x: hidden; }
        body {
            font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: var(--text);
            background: var(--light);
        }
        .container { max-width: 1200px; margin: 0 auto; padding: 0 20px; }

        header {
            background: var(--dark);
            color: white;
            padding: 15px 0;
        }
        .header-content {
            display: flex;
            justify-content: space-between;
            align-items: center;
            flex-wrap: wrap;
            gap: 15px;
        }
        .logo { font-size: 1.5rem; font-weight: 700; color: var(--primary); text-decoration: none; }
        .phone-cta {
            background: var(--primary);
            color: var(--dark);
            padding: 12px 24px;
            text-decoration: none;
            font-weight: 700;
            border-radius: 5px;
        }

        .hero {
            background: linear-gradient(135deg, var(--dark) 0%, #1f2937 100%);
            color: white;
            padding: 60px 0;
            text-align: center;
        }
        .hero h1 {
            font-size: 2.5rem;
            margin-bottom: 15px;
        }
        .hero h1 span { color: var(--primary); }
        .hero p { font-size: 1.2rem; opacity: 0.9; }

        .locations-grid {
            padding: 60px 0;
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
            gap: 30px;
        }

        .county-section {
            background: white;
            padding: 25px;
            border-radius: 10px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.05);
        }
        .county-section h2 {
            color: var(--dark);
            font-size: 1.3rem;
            margin-bottom: 15px;
            padding-bottom: 10px;
            border-bottom: 3px solid var(--primary);
        }
        .city-list {
            list-style: none;
            columns: 2;
            column-gap: 15px;
        }
        .city-list li {
            padding: 5px 0;
        }
        .city-list a {
            color: var(--text);
            text-decoration: none;
            transition: color 0.2s;
        }
        .city-list a:hover {
            color: var(--primary);
        }

        .cta-section {
            padding: 60px 0;
            background: var(--primary);
            text-align: center;
        }
        .cta-section h2 {
            font-size: 2rem;
            color: var(--dark);
            margin-bottom: 20px;
        }
        .cta-btn {
            display: inline-block;
            background: var(--dark);
            color: white;
            padding: 15px 40px;
            text-decoration: none;
            font-weight: 700;
            font-size: 1.1rem;
            border-radius: 5px;
        }

        footer {
            background: var(--dark);
            color: white;
            padding: 40px 0 20px;
            text-align: center;
        }
        footer a {
            color: var(--primary);
            text-decoration: none;
        }

        @media (max-width: 768px) {
            .hero h1 { font-size: 1.8rem; }
            .city-list { columns: 1; }
        }
"#;
