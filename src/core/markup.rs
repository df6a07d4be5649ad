use crate::core::errors::{Error, Result};
use crate::core::source::RangeEntry;
use log::trace;
use roxmltree::{Document, Node};

/*-------------------------------------------------------------------------------------------------
  Parse Hierarchical Markup
-------------------------------------------------------------------------------------------------*/

const FORMAT: &str = "markup";

/// Parse a markup dataset where every child of the document element is a region carrying a
/// `Name` attribute, and every element below a region carries a `Subnet` attribute.
///
/// ```xml
/// <AzurePublicIpAddresses>
///   <Region Name="uswest">
///     <IpRange Subnet="13.64.0.0/11" />
///   </Region>
/// </AzurePublicIpAddresses>
/// ```
///
/// Text, comments and processing instructions between elements are ignored.
pub fn parse(markup: &str) -> Result<Vec<RangeEntry>> {
    let document = Document::parse(markup).map_err(|error| Error::malformed(FORMAT, error))?;

    let mut entries = Vec::new();
    for region_element in elements(document.root_element()) {
        let region = required_attribute(region_element, "Name")?;

        for range_element in elements(region_element) {
            let subnet = required_attribute(range_element, "Subnet")?.trim();
            trace!("Markup range: {region} {subnet}");
            entries.push(RangeEntry::new(region, subnet));
        }
    }

    Ok(entries)
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

fn elements<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

fn required_attribute<'a>(element: Node<'a, '_>, name: &str) -> Result<&'a str> {
    match element.attribute(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => {
            let position = element.document().text_pos_at(element.range().start);
            Err(Error::malformed(
                FORMAT,
                format!(
                    "<{}> element at {} is missing a `{}` attribute",
                    element.tag_name().name(),
                    position,
                    name
                ),
            ))
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MARKUP: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<AzurePublicIpAddresses xmlns:xsd="http://www.w3.org/2001/XMLSchema">
  <!-- published weekly -->
  <Region Name="East US">
    <IpRange Subnet="13.64.0.0/11" />
    <IpRange Subnet="23.96.0.0/14" />
  </Region>
  <Region Name="europewest">
    <IpRange Subnet="40.112.124.0/24" />
  </Region>
  <Region Name="emptyregion" />
</AzurePublicIpAddresses>"#;

    #[test]
    fn test_parse_markup() {
        let entries = parse(TEST_MARKUP).unwrap();

        assert_eq!(
            entries,
            [
                RangeEntry::new("East US", "13.64.0.0/11"),
                RangeEntry::new("East US", "23.96.0.0/14"),
                RangeEntry::new("europewest", "40.112.124.0/24"),
            ]
        );
    }

    #[test]
    fn test_region_without_name() {
        let markup = r#"<Root><Region><IpRange Subnet="13.64.0.0/11"/></Region></Root>"#;
        let error = parse(markup).unwrap_err();

        assert!(matches!(error, Error::MalformedInput { .. }));
        assert!(error.to_string().contains("Name"));
    }

    #[test]
    fn test_range_without_subnet() {
        let markup = r#"<Root><Region Name="East US"><IpRange Address="13.64.0.0"/></Region></Root>"#;
        let error = parse(markup).unwrap_err();

        assert!(matches!(error, Error::MalformedInput { .. }));
        assert!(error.to_string().contains("Subnet"));
    }

    #[test]
    fn test_blank_name_is_missing() {
        let markup = r#"<Root><Region Name="  "><IpRange Subnet="13.64.0.0/11"/></Region></Root>"#;
        assert!(matches!(parse(markup), Err(Error::MalformedInput { .. })));
    }

    #[test]
    fn test_region_name_is_kept_verbatim() {
        let markup = r#"<Root>
  <Region Name="East US "><IpRange Subnet=" 13.64.0.0/11 "/></Region>
  <Region Name="East US"><IpRange Subnet="23.96.0.0/14"/></Region>
</Root>"#;

        assert_eq!(
            parse(markup).unwrap(),
            [
                RangeEntry::new("East US ", "13.64.0.0/11"),
                RangeEntry::new("East US", "23.96.0.0/14"),
            ]
        );
    }

    #[test]
    fn test_broken_document() {
        assert!(matches!(
            parse("<Root><Region Name=\"East US\">"),
            Err(Error::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_invalid_cidr_is_passed_through() {
        // CIDR validation happens when the region model is built
        let markup = r#"<Root><Region Name="East US"><IpRange Subnet="banana"/></Region></Root>"#;
        assert_eq!(parse(markup).unwrap(), [RangeEntry::new("East US", "banana")]);
    }
}
