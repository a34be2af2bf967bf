//! Sample tjk.org markup shared by parser, storage and replay tests.

pub(crate) const RESULT_ROW: &str = r#"<tr class="odd">
  <td class="gunluk-GunlukYarisSonuclari-SONUCNO">1</td>
  <td class="gunluk-GunlukYarisSonuclari-AtAdi3">
<a href="/TR/YarisSever/Query/ConnectedPage/AtKosuBilgileri?1=1&amp;QueryParameter_AtId=70111">KARAHİNDİBAYA </a>
  </td>
  <td class="gunluk-GunlukYarisSonuclari-Yas">2y d  d</td>
  <td class="gunluk-GunlukYarisSonuclari-Baba"><a href="/TR/YarisSever/Query/ConnectedPage/AtKosuBilgileri?1=1&amp;QueryParameter_AtId=20224">REDDY</a></td>
  <td class="gunluk-GunlukYarisSonuclari-Anne"><a href="/TR/YarisSever/Query/ConnectedPage/AtKosuBilgileri?1=1&amp;QueryParameter_AtId=17924">HINDIBA</a></td>
  <td class="gunluk-GunlukYarisSonuclari-Kilo"> 55+1.90 </td>
  <td class="gunluk-GunlukYarisSonuclari-JokeAdi"><a href="/TR/YarisSever/Query/Page/JokeyIstatistikleri?QueryParameter_JokeyId=576">A.ÇELİK</a></td>
  <td class="gunluk-GunlukYarisSonuclari-SahipAdi"><a href="/TR/YarisSever/Query/Page/SahipIstatistikleri?QueryParameter_SahipId=12282">M.YILMAZ</a></td>
  <td class="gunluk-GunlukYarisSonuclari-AntronorAdi"><a href="/TR/YarisSever/Query/Page/AntrenorIstatistikleri?QueryParameter_AntronorId=1473">S.KAYA</a></td>
  <td class="gunluk-GunlukYarisSonuclari-Derece">1.05.76</td>
  <td class="gunluk-GunlukYarisSonuclari-SiraId">7</td>
  <td class="gunluk-GunlukYarisSonuclari-Hc"></td>
</tr>"#;

pub(crate) const FIXTURE_ROW: &str = r#"<tr>
  <td class="gunluk-GunlukYarisProgrami-SiraId">3</td>
  <td class="gunluk-GunlukYarisProgrami-AtAdi"><a href="/TR/YarisSever/Query/ConnectedPage/AtKosuBilgileri?1=1&amp;QueryParameter_AtId=71234">GÜLBAHAR</a></td>
  <td class="gunluk-GunlukYarisProgrami-Yas">3y a  k</td>
  <td class="gunluk-GunlukYarisProgrami-Baba"><a href="/TR/YarisSever/Query/ConnectedPage/AtKosuBilgileri?1=1&amp;QueryParameter_AtId=30011">SEA OF LIGHT</a></td>
  <td class="gunluk-GunlukYarisProgrami-Anne"><a href="/TR/YarisSever/Query/ConnectedPage/AtKosuBilgileri?1=1&amp;QueryParameter_AtId=30012">BAHAR</a></td>
  <td class="gunluk-GunlukYarisProgrami-Kilo">57</td>
  <td class="gunluk-GunlukYarisProgrami-JokeAdi"><a href="/TR/YarisSever/Query/Page/JokeyIstatistikleri?QueryParameter_JokeyId=601">H.KARATAŞ</a></td>
  <td class="gunluk-GunlukYarisProgrami-SahipAdi"><a href="/TR/YarisSever/Query/Page/SahipIstatistikleri?QueryParameter_SahipId=9001">A.DEMİR</a></td>
  <td class="gunluk-GunlukYarisProgrami-AntronorAdi"><a href="/TR/YarisSever/Query/Page/AntrenorIstatistikleri?QueryParameter_AntronorId=222">B.ÖZ</a></td>
  <td class="gunluk-GunlukYarisProgrami-Hc">48</td>
</tr>"#;


pub(crate) const RESULT_ROW_2: &str = r#"<tr class="even">
  <td class="gunluk-GunlukYarisSonuclari-SONUCNO">2</td>
  <td class="gunluk-GunlukYarisSonuclari-AtAdi3"><a href="/TR/YarisSever/Query/ConnectedPage/AtKosuBilgileri?1=1&amp;QueryParameter_AtId=70200">DEMİRKIRAT</a></td>
  <td class="gunluk-GunlukYarisSonuclari-Yas">2y k  e</td>
  <td class="gunluk-GunlukYarisSonuclari-Baba"><a href="/TR/YarisSever/Query/ConnectedPage/AtKosuBilgileri?1=1&amp;QueryParameter_AtId=20300">TURBO</a></td>
  <td class="gunluk-GunlukYarisSonuclari-Anne"><a href="/TR/YarisSever/Query/ConnectedPage/AtKosuBilgileri?1=1&amp;QueryParameter_AtId=17999">KIRAZ</a></td>
  <td class="gunluk-GunlukYarisSonuclari-Kilo">57</td>
  <td class="gunluk-GunlukYarisSonuclari-JokeAdi"><a href="/TR/YarisSever/Query/Page/JokeyIstatistikleri?QueryParameter_JokeyId=580">G.KOCAKAYA</a></td>
  <td class="gunluk-GunlukYarisSonuclari-SahipAdi"><a href="/TR/YarisSever/Query/Page/SahipIstatistikleri?QueryParameter_SahipId=12000">T.ŞEN</a></td>
  <td class="gunluk-GunlukYarisSonuclari-AntronorAdi"><a href="/TR/YarisSever/Query/Page/AntrenorIstatistikleri?QueryParameter_AntronorId=1500">E.KOÇ</a></td>
  <td class="gunluk-GunlukYarisSonuclari-Derece">1.06.02</td>
  <td class="gunluk-GunlukYarisSonuclari-SiraId">2</td>
  <td class="gunluk-GunlukYarisSonuclari-Hc">54</td>
</tr>"#;

pub(crate) const RESULT_ROW_3: &str = r#"<tr class="odd">
  <td class="gunluk-GunlukYarisSonuclari-SONUCNO">1</td>
  <td class="gunluk-GunlukYarisSonuclari-AtAdi3"><a href="/TR/YarisSever/Query/ConnectedPage/AtKosuBilgileri?1=1&amp;QueryParameter_AtId=65001">BOLD PILOT</a></td>
  <td class="gunluk-GunlukYarisSonuclari-Yas">4y a  e</td>
  <td class="gunluk-GunlukYarisSonuclari-Baba"><a href="/TR/YarisSever/Query/ConnectedPage/AtKosuBilgileri?1=1&amp;QueryParameter_AtId=10001">PERSIAN</a></td>
  <td class="gunluk-GunlukYarisSonuclari-Anne"><a href="/TR/YarisSever/Query/ConnectedPage/AtKosuBilgileri?1=1&amp;QueryParameter_AtId=10002">BOLD LADY</a></td>
  <td class="gunluk-GunlukYarisSonuclari-Kilo">58</td>
  <td class="gunluk-GunlukYarisSonuclari-JokeAdi"><a href="/TR/YarisSever/Query/Page/JokeyIstatistikleri?QueryParameter_JokeyId=576">A.ÇELİK</a></td>
  <td class="gunluk-GunlukYarisSonuclari-SahipAdi"><a href="/TR/YarisSever/Query/Page/SahipIstatistikleri?QueryParameter_SahipId=8000">Ö.KARA</a></td>
  <td class="gunluk-GunlukYarisSonuclari-AntronorAdi"><a href="/TR/YarisSever/Query/Page/AntrenorIstatistikleri?QueryParameter_AntronorId=1473">S.KAYA</a></td>
  <td class="gunluk-GunlukYarisSonuclari-Derece">1.24.50</td>
  <td class="gunluk-GunlukYarisSonuclari-SiraId">1</td>
  <td class="gunluk-GunlukYarisSonuclari-Hc">-</td>
</tr>"#;

pub(crate) const RESULT_ROW_4: &str = r#"<tr class="odd">
  <td class="gunluk-GunlukYarisSonuclari-SONUCNO">1</td>
  <td class="gunluk-GunlukYarisSonuclari-AtAdi3"><a href="/TR/YarisSever/Query/ConnectedPage/AtKosuBilgileri?1=1&amp;QueryParameter_AtId=70333">YILDIZ TEPE</a></td>
  <td class="gunluk-GunlukYarisSonuclari-Yas">3y d  k</td>
  <td class="gunluk-GunlukYarisSonuclari-Baba"><a href="/TR/YarisSever/Query/ConnectedPage/AtKosuBilgileri?1=1&amp;QueryParameter_AtId=20224">REDDY</a></td>
  <td class="gunluk-GunlukYarisSonuclari-Anne"><a href="/TR/YarisSever/Query/ConnectedPage/AtKosuBilgileri?1=1&amp;QueryParameter_AtId=18050">TEPE</a></td>
  <td class="gunluk-GunlukYarisSonuclari-Kilo">56</td>
  <td class="gunluk-GunlukYarisSonuclari-JokeAdi"><a href="/TR/YarisSever/Query/Page/JokeyIstatistikleri?QueryParameter_JokeyId=580">G.KOCAKAYA</a></td>
  <td class="gunluk-GunlukYarisSonuclari-SahipAdi"><a href="/TR/YarisSever/Query/Page/SahipIstatistikleri?QueryParameter_SahipId=12282">M.YILMAZ</a></td>
  <td class="gunluk-GunlukYarisSonuclari-AntronorAdi"><a href="/TR/YarisSever/Query/Page/AntrenorIstatistikleri?QueryParameter_AntronorId=1500">E.KOÇ</a></td>
  <td class="gunluk-GunlukYarisSonuclari-Derece">1.12.40</td>
  <td class="gunluk-GunlukYarisSonuclari-SiraId">4</td>
  <td class="gunluk-GunlukYarisSonuclari-Hc">61</td>
</tr>"#;

/// Race heading with the site's quirks: CRLF pairs between distance and
/// track type, and a literal backslash-r after the track type.
const RACE_CONFIG_1: &str =
    "<h3 class=\"race-config\">\r\n  2 Yaşlı İngilizler, 57 kg,\r\n  <span>  1100\r\n\r\nÇim\\r\\n</span>\r\n</h3>";

const RACE_CONFIG_2: &str =
    "<h3 class=\"race-config\">3 ve Yukarı Araplar, 58 kg, <span>1 400\r\n\r\nKum</span></h3>";

/// Heading without a span: the distance shares a text node with the comma
const RACE_CONFIG_3: &str =
    "<h3 class=\"race-config\">\r\n  Handikap 15, 57 kg,\r\n   1200\r\n\r\nÇim\r\n</h3>";

fn race_div(race_id: &str, config: &str, rows: &[&str]) -> String {
    format!(
        r##"<div id="{}" class="race-pane">
  <div class="race-details">
    <div class="race-no"><a href="#">1. Koşu</a></div>
    {}
  </div>
  <table class="tablesorter">
    <thead><tr><th>S</th><th>At İsmi</th></tr></thead>
    <tbody>
{}
    </tbody>
  </table>
</div>"##,
        race_id,
        config,
        rows.join("\n")
    )
}

fn page(races: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Günlük Yarış Sonuçları</title></head>
<body>
<div class="program">
  <div class="races-tabs"><ul><li>1. Koşu</li><li>2. Koşu</li></ul></div>
  <div class="races-panes">
{}
  </div>
</div>
</body>
</html>"#,
        races.join("\n")
    )
}

/// Bursa result page: race 110862 (1100 m turf, two horses), race 110863
/// (1400 m sand, one horse) and race 110864 (1200 m turf, one horse)
pub(crate) fn result_page() -> String {
    page(&[
        race_div("110862", RACE_CONFIG_1, &[RESULT_ROW, RESULT_ROW_2]),
        race_div("110863", RACE_CONFIG_2, &[RESULT_ROW_3]),
        race_div("110864", RACE_CONFIG_3, &[RESULT_ROW_4]),
    ])
}

/// Kocaeli fixture page with a single race
pub(crate) fn fixture_page() -> String {
    page(&[race_div("120001", RACE_CONFIG_1, &[FIXTURE_ROW])])
}

/// Page served for a city/date without races
pub(crate) const EMPTY_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<div class="program"><p>Aradığınız kriterlere uygun yarış bulunamadı.</p></div>
</body></html>"#;

/// Result page whose only race heading lacks the CRLF pair
pub(crate) fn malformed_heading_page() -> String {
    page(&[race_div(
        "110900",
        "<h3 class=\"race-config\">Maiden, 1200 Çim</h3>",
        &[RESULT_ROW],
    )])
}
