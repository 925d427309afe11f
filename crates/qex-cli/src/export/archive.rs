//! Renamed-PDF archive: original document bytes under quote-number names.

use std::io::{Seek, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use qex_core::{BatchResult, QuoteDocument};

/// Write a zip of the original documents renamed per the batch result.
///
/// Documents and records are paired by position, so `documents` must be
/// the same sequence the batch was run on.
pub fn write_renamed_zip<W: Write + Seek>(
    result: &BatchResult,
    documents: &[QuoteDocument],
    writer: W,
) -> anyhow::Result<()> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, document) in result.renamed_filenames().iter().zip(documents) {
        zip.start_file(name.as_str(), options)?;
        zip.write_all(&document.data)?;
    }

    zip.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};
    use qex_core::{BatchPipeline, DocumentDecoder};

    struct PlainTextDecoder;

    impl DocumentDecoder for PlainTextDecoder {
        fn decode(&self, data: &[u8]) -> String {
            String::from_utf8(data.to_vec()).unwrap_or_default()
        }
    }

    #[test]
    fn test_archive_renames_and_keeps_bytes() {
        let documents = vec![
            QuoteDocument::new("upload-a.pdf", b"Quote #: Q1\n".to_vec()),
            QuoteDocument::new("upload-b.pdf", b"no number here".to_vec()),
        ];
        let pipeline = BatchPipeline::with_decoder(Box::new(PlainTextDecoder));
        let result = pipeline.run(&documents);

        let mut buffer = Cursor::new(Vec::new());
        write_renamed_zip(&result, &documents, &mut buffer).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(buffer.into_inner())).unwrap();
        assert_eq!(archive.len(), 2);

        let mut content = Vec::new();
        archive
            .by_name("Q1.pdf")
            .unwrap()
            .read_to_end(&mut content)
            .unwrap();
        assert_eq!(content, b"Quote #: Q1\n");

        content.clear();
        archive
            .by_name("Quote_0002.pdf")
            .unwrap()
            .read_to_end(&mut content)
            .unwrap();
        assert_eq!(content, b"no number here");
    }
}
