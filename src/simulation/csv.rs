// src/simulation/csv.rs

use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// 数値解と解析解を受け取って描画・保存する出力先
pub trait Plotter {
    fn plot(
        &mut self,
        numerical: &[(f64, f64)],
        reference: &[(f64, f64)],
    ) -> Result<(), Box<dyn Error>>;
}

/// 縦持ち形式 (series,t,y) のCSVを書き出す
pub struct CsvPlotter<W: Write> {
    writer: W,
}

impl<W: Write> CsvPlotter<W> {
    pub fn new(writer: W) -> Self {
        CsvPlotter { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Plotter for CsvPlotter<W> {
    fn plot(
        &mut self,
        numerical: &[(f64, f64)],
        reference: &[(f64, f64)],
    ) -> Result<(), Box<dyn Error>> {
        write_csv_header(&mut self.writer)?;
        for (t, y) in numerical {
            self.writer.write_all(create_csv_row("numerical", *t, *y).as_bytes())?;
        }
        for (t, y) in reference {
            self.writer.write_all(create_csv_row("exact", *t, *y).as_bytes())?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// CSV出力の設定
///
/// 出力先ディレクトリが無ければ作成する。
pub fn setup_csv_output<P: AsRef<Path>>(
    path: P,
) -> Result<CsvPlotter<BufWriter<File>>, Box<dyn Error>> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_file = File::create(path)?;
    Ok(CsvPlotter::new(BufWriter::new(output_file)))
}

/// CSVヘッダーの書き込み
pub fn write_csv_header<W: Write>(writer: &mut W) -> Result<(), std::io::Error> {
    writer.write_all(b"series,t,y\n")
}

/// CSV行の作成
pub fn create_csv_row(series: &str, t: f64, y: f64) -> String {
    format!("{},{},{}\n", series, t, y)
}
