//! Trimmed-down results-page markup, one fixture per layout variant

/// Legacy `.g .rc` result with list sitelinks and an action-menu overlay
pub const ORGANIC_LEGACY_LIST: &str = r#"
<div id="rso">
  <div class="g">
    <div class="rc">
      <div class="r">
        <a href="https://www.rust-lang.org/"><h3>Rust Programming Language</h3></a>
        <cite>www.rust-lang.org</cite>
        <div class="action-menu">
          <ul><li><a href="/cache">Cached</a></li><li><a href="/similar">Similar</a></li></ul>
        </div>
      </div>
      <div class="IsZvec">
        A language empowering everyone to build <em>reliable</em> and <b>efficient</b> software.
        <div class="action-menu"><span>More options</span></div>
      </div>
      <ul>
        <li><h3><a href="https://www.rust-lang.org/learn">Learn</a></h3><div>Get started with Rust.</div></li>
        <li><h3><a href="https://www.rust-lang.org/tools/install">Install</a></h3><div>Rustup.</div></li>
      </ul>
    </div>
  </div>
  <div class="g">
    <div class="rc">
      <a href="https://doc.rust-lang.org/book/"><h3>The Rust Book</h3></a>
      <cite>doc.rust-lang.org › book</cite>
      <div class="IsZvec">An introductory book about <em>Rust</em>.</div>
    </div>
  </div>
</div>
"#;

/// Legacy `.g .rc` result with 2020 grid sitelinks
pub const ORGANIC_GRID_2020: &str = r#"
<div class="g">
  <div class="rc">
    <a href="https://crates.io/"><h3>crates.io: Rust Package Registry</h3></a>
    <cite>crates.io</cite>
    <div class="IsZvec">The Rust community's crate registry.</div>
    <div class="St3GK">
      <div>
        <h3><div><a href="https://crates.io/crates">Browse All Crates</a></div></h3>
        <div>Find crates by name.</div>
      </div>
      <div>
        <h3><div><a href="https://crates.io/policies">Policies</a></div></h3>
      </div>
      <div>
        <h3><div><a href="https://crates.io/me">Account</a></div></h3>
        <div>Manage</div><div>your tokens</div>
      </div>
    </div>
  </div>
</div>
"#;

/// January 2021 `.tF2Cxc` result whose sitelinks sit in a sibling table
pub const ORGANIC_TABLE_2021: &str = r#"
<div id="rso">
  <div class="hlcw0c">
    <div class="g">
      <div class="tF2Cxc">
        <div class="yuRUbf">
          <a href="https://docs.rs/"><h3>Docs.rs</h3><div><cite>docs.rs</cite></div></a>
        </div>
        <div class="IsZvec"><span>Documentation for <em>Rust</em> crates.</span></div>
        <div class="fG8Fp">Rating: 4.5 · 1,234 reviews · $19.99</div>
      </div>
    </div>
  </div>
  <table>
    <tr>
      <td><div class="sld"><a href="https://docs.rs/releases">Releases</a><div class="s">Recent releases</div></div></td>
      <td><div class="sld"><a href="https://docs.rs/about">About</a></div></td>
    </tr>
    <tr>
      <td><div class="sld"><a href="https://docs.rs/search">Search</a><div class="s">Find a crate</div></div></td>
    </tr>
  </table>
</div>
"#;

/// A result carrying both list and grid sitelinks
pub const ORGANIC_MIXED_SITELINKS: &str = r#"
<div class="g">
  <div class="rc">
    <a href="https://example.com/"><h3>Example</h3></a>
    <ul><li><h3><a href="https://example.com/list">List link</a></h3></li></ul>
    <div class="St3GK"><div><h3><div><a href="https://example.com/grid">Grid link</a></div></h3></div></div>
  </div>
</div>
"#;

/// A result whose links have no href
pub const ORGANIC_WITHOUT_HREFS: &str = r#"
<div class="g">
  <div class="rc">
    <a><h3>No link</h3></a>
    <ul><li><h3><a>Dangling sitelink</a></h3></li></ul>
  </div>
</div>
"#;

/// Current `#tads` ad region with two ads
pub const ADS_CURRENT: &str = r#"
<div id="tads">
  <div>
    <a href="https://shoes.example/" ping="/aclk?track=1">
      <div role="heading">Running Shoes Sale</div>
      <div><span>Ad</span><span>·</span><span>shoes.example/running</span></div>
    </a>
    <w-ad-seller-rating><a href="https://reviews.example/shoes">4.8 stars</a></w-ad-seller-rating>
    <div class="MUxGbd yDYNvb lyLwlc"><span>Great <em>shoes</em> for <b>running</b>.</span></div>
    <div>
      <h3><div><a href="https://shoes.example/sale">Sale</a></div></h3>
      <div>Up to 50% off</div>
    </div>
    <a data-pcu="1" href="tel:+15550100">Call</a>
    <div><a href="https://shoes.example/stores">Stores</a></div>
  </div>
  <div>
    <a href="https://boots.example/" ping="/aclk?track=2">
      <div role="heading">Boots</div>
      <div><span>Ad</span><span>·</span></div>
    </a>
  </div>
</div>
"#;

/// Legacy `.ads-fr` region with a positional description
pub const ADS_LEGACY: &str = r#"
<div class="ads-fr">
  <a href="https://old.example/"><div role="heading">Old Ad One</div></a>
  <div><div><div><div>
    <div>old.example</div>
    <div>Legacy <b>description</b></div>
  </div></div></div></div>
</div>
<div class="ads-fr">
  <a href="https://old.example/two"><div role="heading">Old Ad Two</div></a>
</div>
"#;

/// Shopping units in the right-hand column
pub const PRODUCTS: &str = r#"
<div class="commercial-unit-desktop-rhs">
  <div class="pla-unit">
    <div role="heading"><a href="https://shop.example/p1"><span>Trail Shoe</span></a></div>
    <div>$89.99</div>
    <div>$120.00</div>
    <div><span>shop.example</span><span>Free shipping</span></div>
  </div>
  <div class="pla-unit">
    <div role="heading"><a href="https://other.example/p2">Road Shoe</a></div>
    <div><span>other.example</span></div>
  </div>
  <div class="pla-unit"><span>No heading here</span></div>
</div>
"#;

/// Related searches, one entry with no href and one relative
pub const RELATED: &str = r#"
<div id="brs">
  <a href="/search?q=rust+book">rust <b>book</b></a>
  <a>broken entry</a>
  <a href="https://www.google.com/search?q=rust+vs+go">rust vs go</a>
</div>
"#;
